use std::fmt;

use log::debug;
use nalgebra::{Point2, Point3};

use crate::bounds::{BoundedAxis, Bounds, Error};

/// `b1 <= x1 <= a1`, `b2 <= x2 <= a2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    x1: BoundedAxis,
    x2: BoundedAxis,
}

impl Rectangle {
    pub fn new(b1: f64, a1: f64, b2: f64, a2: f64) -> Result<Self, Error> {
        let x1 = BoundedAxis::on_axis(1, b1, a1)?;
        let x2 = BoundedAxis::on_axis(2, b2, a2)?;
        debug!("rectangle {:?} x {:?}", x1, x2);
        Ok(Rectangle { x1, x2 })
    }

    /// Replace all bounds. On error the rectangle is left untouched.
    pub fn set_bounds(&mut self, b1: f64, a1: f64, b2: f64, a2: f64) -> Result<(), Error> {
        *self = Rectangle::new(b1, a1, b2, a2)?;
        Ok(())
    }

    pub fn x1(&self) -> &BoundedAxis {
        &self.x1
    }

    pub fn x2(&self) -> &BoundedAxis {
        &self.x2
    }

    /// Needs at least two coordinates; anything past the second is ignored.
    pub fn contains(&self, coords: &[f64]) -> bool {
        match coords {
            [x1, x2, ..] => self.x1.contains(*x1) && self.x2.contains(*x2),
            _ => false,
        }
    }

    pub fn contains_point2(&self, p: &Point2<f64>) -> bool {
        self.contains(&[p.x, p.y])
    }

    pub fn format_report(&self) -> Vec<String> {
        vec![self.x1.describe(1), self.x2.describe(2)]
    }
}

impl Bounds for Rectangle {
    type Point = [f64];

    fn contains(&self, p: &[f64]) -> bool {
        Rectangle::contains(self, p)
    }
}

/// A [`Rectangle`] extended by `b3 <= x3 <= a3`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallelepiped {
    base: Rectangle,
    x3: BoundedAxis,
}

impl Parallelepiped {
    pub fn new(b1: f64, a1: f64, b2: f64, a2: f64, b3: f64, a3: f64) -> Result<Self, Error> {
        let base = Rectangle::new(b1, a1, b2, a2)?;
        let x3 = BoundedAxis::on_axis(3, b3, a3)?;
        debug!("parallelepiped extends with {:?}", x3);
        Ok(Parallelepiped { base, x3 })
    }

    /// Replace all bounds. On error the parallelepiped is left untouched.
    pub fn set_bounds(
        &mut self,
        b1: f64,
        a1: f64,
        b2: f64,
        a2: f64,
        b3: f64,
        a3: f64,
    ) -> Result<(), Error> {
        *self = Parallelepiped::new(b1, a1, b2, a2, b3, a3)?;
        Ok(())
    }

    /// The projection onto the first two axes.
    pub fn rectangle(&self) -> &Rectangle {
        &self.base
    }

    pub fn x1(&self) -> &BoundedAxis {
        self.base.x1()
    }

    pub fn x2(&self) -> &BoundedAxis {
        self.base.x2()
    }

    pub fn x3(&self) -> &BoundedAxis {
        &self.x3
    }

    /// Two coordinates are a projection query and ignore `x3` entirely. Three or more check all
    /// three axes, ignoring anything past the third.
    pub fn contains(&self, coords: &[f64]) -> bool {
        match coords {
            [_, _] => self.base.contains(coords),
            [x1, x2, x3, ..] => self.base.contains(&[*x1, *x2]) && self.x3.contains(*x3),
            _ => false,
        }
    }

    pub fn contains_point2(&self, p: &Point2<f64>) -> bool {
        self.contains(&[p.x, p.y])
    }

    pub fn contains_point3(&self, p: &Point3<f64>) -> bool {
        self.contains(&[p.x, p.y, p.z])
    }

    pub fn format_report(&self) -> Vec<String> {
        let mut lines = self.base.format_report();
        lines.push(self.x3.describe(3));
        lines
    }
}

impl Bounds for Parallelepiped {
    type Point = [f64];

    fn contains(&self, p: &[f64]) -> bool {
        Parallelepiped::contains(self, p)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Rectangle(Rectangle),
    Parallelepiped(Parallelepiped),
}

impl Region {
    pub fn name(&self) -> &'static str {
        match self {
            Region::Rectangle(_) => "rectangle",
            Region::Parallelepiped(_) => "parallelepiped",
        }
    }

    pub fn dimensions(&self) -> usize {
        match self {
            Region::Rectangle(_) => 2,
            Region::Parallelepiped(_) => 3,
        }
    }

    pub fn x1(&self) -> &BoundedAxis {
        match self {
            Region::Rectangle(r) => r.x1(),
            Region::Parallelepiped(p) => p.x1(),
        }
    }

    pub fn contains(&self, coords: &[f64]) -> bool {
        match self {
            Region::Rectangle(r) => r.contains(coords),
            Region::Parallelepiped(p) => p.contains(coords),
        }
    }

    pub fn contains_point2(&self, p: &Point2<f64>) -> bool {
        self.contains(&[p.x, p.y])
    }

    /// One line per axis, in axis order.
    pub fn format_report(&self) -> Vec<String> {
        match self {
            Region::Rectangle(r) => r.format_report(),
            Region::Parallelepiped(p) => p.format_report(),
        }
    }
}

impl Bounds for Region {
    type Point = [f64];

    fn contains(&self, p: &[f64]) -> bool {
        Region::contains(self, p)
    }
}

impl From<Rectangle> for Region {
    fn from(r: Rectangle) -> Self {
        Region::Rectangle(r)
    }
}

impl From<Parallelepiped> for Region {
    fn from(p: Parallelepiped) -> Self {
        Region::Parallelepiped(p)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = match self {
            Region::Rectangle(_) => "Rectangle",
            Region::Parallelepiped(_) => "Parallelepiped",
        };
        write!(f, "{} bounds:", header)?;
        for line in self.format_report() {
            write!(f, "\n  {}", line)?;
        }
        Ok(())
    }
}
