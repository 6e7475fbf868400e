use crate::data::{BezierSegment, BezierSpline, Point};
use crate::error::{BezierError, BezierResult};

/// Parse SVG path data into a spline
pub trait FromSvgPath: Sized {
    /// Parse from SVG path data string
    fn from_svg_path(data: &str) -> BezierResult<Self>;
}

impl FromSvgPath for BezierSpline {
    /// Absolute `M`, `C`, `L` and `Z` commands are understood, points land on `z = 0`
    fn from_svg_path(data: &str) -> BezierResult<Self> {
        let mut path = PathBuilder::default();
        let mut current_command = None;
        let mut numbers = vec![];
        let mut current_number = String::new();

        for c in data.chars() {
            match c {
                'M' | 'C' | 'L' | 'Z' => {
                    flush_number(&mut current_number, &mut numbers)?;
                    if let Some(command) = current_command {
                        path.apply(command, &numbers)?;
                    }
                    numbers.clear();
                    current_command = Some(c);
                }
                '0'..='9' | '.' | '-' | '+' | 'e' | 'E' => current_number.push(c),
                ',' | ' ' | '\n' | '\t' => flush_number(&mut current_number, &mut numbers)?,
                _ => {
                    return Err(BezierError::Parse(format!(
                        "unsupported path command '{}'",
                        c
                    )))
                }
            }
        }

        flush_number(&mut current_number, &mut numbers)?;
        if let Some(command) = current_command {
            path.apply(command, &numbers)?;
        }

        path.finish()
    }
}

fn flush_number(current_number: &mut String, numbers: &mut Vec<f64>) -> BezierResult<()> {
    if !current_number.is_empty() {
        let number = current_number
            .parse::<f64>()
            .map_err(|e| BezierError::Parse(format!("bad number '{}': {}", current_number, e)))?;
        numbers.push(number);
        current_number.clear();
    }
    Ok(())
}

#[derive(Default)]
struct PathBuilder {
    segments: Vec<BezierSegment>,
    start: Option<Point>,
    current: Option<Point>,
    closed: bool,
}

impl PathBuilder {
    fn apply(&mut self, command: char, numbers: &[f64]) -> BezierResult<()> {
        if self.closed {
            return Err(BezierError::Parse(
                "commands after closing the path".to_string(),
            ));
        }

        match command {
            'M' => {
                if self.start.is_some() {
                    return Err(BezierError::Parse(
                        "only a single sub path is supported".to_string(),
                    ));
                }
                let [x, y] = take_coordinates::<2>(command, numbers)?;
                let point = Point::new(x, y, 0.0);
                self.start = Some(point);
                self.current = Some(point);
            }
            'C' => {
                let [x1, y1, x2, y2, x, y] = take_coordinates::<6>(command, numbers)?;
                let from = self.current_point(command)?;
                let end = Point::new(x, y, 0.0);
                self.segments.push(BezierSegment::new(
                    from,
                    Point::new(x1, y1, 0.0),
                    Point::new(x2, y2, 0.0),
                    end,
                ));
                self.current = Some(end);
            }
            'L' => {
                let [x, y] = take_coordinates::<2>(command, numbers)?;
                let from = self.current_point(command)?;
                let end = Point::new(x, y, 0.0);
                self.segments.push(straight(from, end));
                self.current = Some(end);
            }
            'Z' => {
                if !numbers.is_empty() {
                    return Err(BezierError::Parse("Z takes no coordinates".to_string()));
                }
                let from = self.current_point(command)?;
                if let Some(start) = self.start {
                    if from != start {
                        self.segments.push(straight(from, start));
                        self.current = Some(start);
                    }
                }
                self.closed = true;
            }
            other => {
                return Err(BezierError::Parse(format!(
                    "unsupported path command '{}'",
                    other
                )))
            }
        }
        Ok(())
    }

    fn current_point(&self, command: char) -> BezierResult<Point> {
        self.current
            .ok_or_else(|| BezierError::Parse(format!("{} before M", command)))
    }

    fn finish(self) -> BezierResult<BezierSpline> {
        if self.segments.is_empty() {
            return Err(BezierError::Parse(
                "Cannot create spline from empty path".to_string(),
            ));
        }
        let mut spline = BezierSpline::from_segments(&self.segments)?;
        if self.closed {
            spline.set_loop(true);
        }
        Ok(spline)
    }
}

fn take_coordinates<const N: usize>(command: char, numbers: &[f64]) -> BezierResult<[f64; N]> {
    numbers.try_into().map_err(|_| {
        BezierError::Parse(format!(
            "{} expects {} numbers, got {}",
            command,
            N,
            numbers.len()
        ))
    })
}

/// A straight cubic with its handles at one and two thirds
fn straight(from: Point, to: Point) -> BezierSegment {
    BezierSegment::new(from, from.lerp(&to, 1.0 / 3.0), from.lerp(&to, 2.0 / 3.0), to)
}
