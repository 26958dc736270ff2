use clap::ValueEnum;

use crate::number::NumberFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Rectangle,
    Parallelepiped,
}

impl Shape {
    /// Number of bounds needed to build the shape.
    pub fn bound_count(&self) -> usize {
        self.dimensions() * 2
    }

    pub fn dimensions(&self) -> usize {
        match self {
            Shape::Rectangle => 2,
            Shape::Parallelepiped => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, the user is asked.
    pub shape: Option<Shape>,
    pub fallback: NumberFormat,
    pub retry_invalid: bool,
}

pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            config: Config {
                shape: None,
                fallback: NumberFormat::comma_decimal(),
                retry_invalid: true,
            },
        }
    }
}

impl ConfigBuilder {
    pub fn set_shape(mut self, shape: Shape) -> Self {
        self.config.shape = Some(shape);
        self
    }

    pub fn set_fallback(mut self, fallback: NumberFormat) -> Self {
        self.config.fallback = fallback;
        self
    }

    pub fn set_retry_invalid(mut self, retry: bool) -> Self {
        self.config.retry_invalid = retry;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::default().build();
    assert_eq!(config.shape, None);
    assert_eq!(config.fallback, NumberFormat::comma_decimal());
    assert!(config.retry_invalid);

    let config = ConfigBuilder::default()
        .set_shape(Shape::Parallelepiped)
        .set_fallback(NumberFormat::invariant())
        .set_retry_invalid(false)
        .build();
    assert_eq!(config.shape, Some(Shape::Parallelepiped));
    assert_eq!(config.fallback, NumberFormat::invariant());
    assert!(!config.retry_invalid);
    assert_eq!(Shape::Parallelepiped.bound_count(), 6);
}
