use std::io::{BufRead, Write};

use anyhow::Error;
use log::{info, warn};
use nalgebra::Point2;

use crate::{
    config::{Config, Shape},
    input::NumberReader,
    region::{Parallelepiped, Rectangle, Region},
};

type Result<T> = std::result::Result<T, Error>;

/// One interactive run: choose a shape, read its bounds, test a point.
pub struct Session<R, W> {
    config: Config,
    reader: NumberReader<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        let reader = NumberReader::new(input, output, config.fallback);
        Session { config, reader }
    }

    pub fn into_output(self) -> W {
        self.reader.into_output()
    }

    fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.reader.output(), "{}", msg)?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<Region> {
        self.say("Rectangle and Parallelepiped demo\n")?;

        let shape = match self.config.shape {
            Some(shape) => shape,
            None => self.choose_shape()?,
        };
        info!("building a {:?}", shape);

        let region = self.read_region(shape)?;

        self.say("")?;
        let report = region.to_string();
        self.say(&report)?;
        self.say("")?;

        self.check_point(shape, &region)?;
        self.check_sample(shape, &region)?;

        Ok(region)
    }

    fn choose_shape(&mut self) -> Result<Shape> {
        self.say(
            "Choose mode: enter '1' to work with a Rectangle, anything else for Parallelepiped:",
        )?;
        let choice = self.reader.read_line()?.unwrap_or_default();
        Ok(if choice == "1" {
            Shape::Rectangle
        } else {
            Shape::Parallelepiped
        })
    }

    fn read_region(&mut self, shape: Shape) -> Result<Region> {
        let prompt = match shape {
            Shape::Rectangle => "Enter rectangle bounds (b1 a1 b2 a2) separated by spaces:",
            Shape::Parallelepiped => {
                "Enter parallelepiped bounds (b1 a1 b2 a2 b3 a3) separated by spaces:"
            }
        };

        loop {
            self.say(prompt)?;
            let v = self.reader.read_numbers(shape.bound_count())?;
            let region = match shape {
                Shape::Rectangle => Rectangle::new(v[0], v[1], v[2], v[3]).map(Region::from),
                Shape::Parallelepiped => {
                    Parallelepiped::new(v[0], v[1], v[2], v[3], v[4], v[5]).map(Region::from)
                }
            };

            match region {
                Ok(region) => return Ok(region),
                Err(err) if self.config.retry_invalid => {
                    warn!("{}", err);
                    self.say(&format!("Invalid bounds: {}", err))?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn check_point(&mut self, shape: Shape, region: &Region) -> Result<()> {
        let prompt = match shape {
            Shape::Rectangle => "Enter a 2D point (x1 x2) to check for the rectangle:",
            Shape::Parallelepiped => "Enter a 3D point (x1 x2 x3) to check for the parallelepiped:",
        };
        self.say(prompt)?;

        let point = self.reader.read_numbers(shape.dimensions())?;
        let verdict = if region.contains(&point) {
            format!("Point belongs to the {}.", region.name())
        } else {
            format!("Point does NOT belong to the {}.", region.name())
        };
        self.say(&verdict)
    }

    /// A 2D query against the same region; for a parallelepiped this is a projection query.
    fn check_sample(&mut self, shape: Shape, region: &Region) -> Result<()> {
        let x = match shape {
            Shape::Rectangle => 0.,
            Shape::Parallelepiped => region.x1().low(),
        };
        let sample = Point2::new(x, 0.);

        self.say("")?;
        self.say("Checking a 2D sample point against the same region:")?;
        let line = format!(
            "Sample point ({}, {}) belongs: {}",
            sample.x,
            sample.y,
            region.contains_point2(&sample)
        );
        self.say(&line)
    }
}
