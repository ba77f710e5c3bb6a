use std::{fmt, fs, io, path, sync::atomic::{AtomicUsize, Ordering}};

use num_traits::real::Real;

use crate::{Coords, debug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    AllSteps,
}

static TRIANGULATION_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    pub fn from_env<C: Real>(coords: &[Coords<C>]) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == SvgOutputLevel::None || coords.is_empty() {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for [x, y] in coords.iter().map(to_f32) {
            view_x_min = view_x_min.min(x);
            view_x_max = view_x_max.max(x);
            view_y_min = view_y_min.min(y);
            view_y_max = view_y_max.max(y);
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}

fn to_f32<C: Real>(c: &Coords<C>) -> [f32; 2] {
    [c.x().to_f32().unwrap_or_default(), c.y().to_f32().unwrap_or_default()]
}

fn fmt_error(_: fmt::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, "failed to format svg element")
}

// Draws the boundary, the clipped ears (the last one highlighted) and the vertices
fn write_state<C: Real>(svg_output: &mut SvgOutput<'_>, coords: &[Coords<C>], ears: &[[usize; 3]]) -> fmt::Result {
    use svg_fmt::*;
    use fmt::Write;

    let boundary: Vec<[f32; 2]> = coords.iter().map(to_f32).collect();
    writeln!(svg_output, "{}",
        polygon(&boundary)
            .stroke(Stroke::Color(rgb(255, 0, 255), svg_output.context.percent(0.3)))
    )?;

    for (i, ear) in ears.iter().enumerate() {
        let color = if i + 1 == ears.len() { rgb(255, 126, 0) } else { blue() };
        let triangle: Vec<[f32; 2]> = ear.iter().map(|&p| to_f32(&coords[p])).collect();
        writeln!(svg_output, "{}",
            polygon(&triangle)
                .stroke(Stroke::Color(color, svg_output.context.percent(0.15)))
        )?;
    }

    for (position, [x, y]) in boundary.iter().copied().enumerate() {
        let r = svg_output.context.percent(0.4);
        writeln!(svg_output, "{}", circle(x, y, r).fill(Fill::Color(green())))?;

        if svg_output.context.show_labels {
            let gap = svg_output.context.percent(1.0);
            writeln!(svg_output, "{}",
                text(x - gap, y, format!("v{}", position))
                    .color(black())
                    .align(Align::Right)
                    .size(svg_output.context.percent(2.0))
            )?;
        }
    }
    Ok(())
}

/// Writes the finished triangulation, and with [SvgOutputLevel::AllSteps] every intermediate state,
/// when `SIMPLEPOLY_SVG_OUTPUT_PATH` is set.
pub(crate) fn output_triangulation<C: Real>(coords: &[Coords<C>], ears: &[[usize; 3]]) -> io::Result<()> {
    let context = match SvgContext::from_env(coords) {
        Some(context) => context,
        None => return Ok(()),
    };
    let sequence = TRIANGULATION_COUNTER.fetch_add(1, Ordering::Relaxed);

    if context.output_level >= SvgOutputLevel::AllSteps {
        let dir: path::PathBuf = format!("{:03}", sequence).into();
        fs::create_dir_all(context.output_path.join(&dir))?;
        for step in 0..=ears.len() {
            let mut svg = SvgOutput::new(&context);
            write_state(&mut svg, coords, &ears[..step]).map_err(fmt_error)?;
            svg.save(dir.join(format!("{:03}.svg", step)))?;
        }
    }

    let mut svg = SvgOutput::new(&context);
    write_state(&mut svg, coords, ears).map_err(fmt_error)?;
    svg.save(format!("{:03}.svg", sequence))
}
