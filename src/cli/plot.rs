use crate::calc::{amount::Amount, horizon::Horizon, projection::Projection};

/// Draws the cumulative cost of a projection over one year
///
/// The plot is a staircase of daily spending. With a target attached the
/// area splits into two bands: what the reduced habit would still cost,
/// and what the reduction saves.
pub struct Plotter<'d> {
    current: &'d Projection,
    target: Option<&'d Projection>,
}

/// Days in the plotted window
const PLOT_DAYS: i64 = 365;

impl<'d> Plotter<'d> {
    pub fn from(current: &'d Projection) -> Self {
        Self {
            current,
            target: None,
        }
    }

    pub fn with_target(mut self, target: &'d Projection) -> Self {
        self.target = Some(target);
        self
    }

    pub fn save_yearly(&self, file: &str) -> std::io::Result<()> {
        self.cumulative_plot().to_band_drawer().render(file)
    }

    fn cumulative_plot(&self) -> Plot<(i64, i64), CumulativeEntry<Amount>> {
        let daily = self.current.cost(Horizon::Day);
        let target_daily = self.target.map(|t| t.cost(Horizon::Day));
        let mut plot = Plot::new();
        for day in 0..PLOT_DAYS {
            let elapsed = day + 1;
            let spent = Amount(daily.0 * elapsed);
            // band increments from the baseline up
            let bands = match target_daily {
                Some(td) => {
                    let kept = Amount(td.0 * elapsed);
                    vec![Amount(0), kept, spent - kept]
                }
                None => vec![Amount(0), spent],
            };
            plot.push((day, day + 1), CumulativeEntry::cumul(bands));
        }
        plot
    }
}

#[derive(Debug)]
pub struct Plot<X, Y> {
    data: Vec<(X, Y)>,
}

impl<X, Y> Plot<X, Y> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn push(&mut self, x: X, y: Y) {
        self.data.push((x, y));
    }
}

#[derive(Debug)]
struct CumulativeEntry<Y> {
    points: Vec<Y>,
}

impl<Y> CumulativeEntry<Y>
where
    Y: std::ops::AddAssign + Clone,
{
    fn cumul(mut points: Vec<Y>) -> Self {
        for i in 1..points.len() {
            let prev = points[i - 1].clone();
            points[i] += prev;
        }
        Self { points }
    }
}

pub trait Scalar {
    fn to_scalar(&self) -> i64;
}
pub trait ScalarRange {
    fn to_range(&self) -> (i64, i64);
}
pub trait ScalarGroup {
    fn to_group(&self) -> Vec<i64>;
}

impl Scalar for Amount {
    fn to_scalar(&self) -> i64 {
        self.0
    }
}

impl Scalar for i64 {
    fn to_scalar(&self) -> i64 {
        *self
    }
}

impl<T> ScalarRange for (T, T)
where
    T: Scalar,
{
    fn to_range(&self) -> (i64, i64) {
        (self.0.to_scalar(), self.1.to_scalar())
    }
}

impl<Y> ScalarGroup for CumulativeEntry<Y>
where
    Y: Scalar,
{
    fn to_group(&self) -> Vec<i64> {
        self.points
            .iter()
            .map(|p| p.to_scalar())
            .collect::<Vec<_>>()
    }
}

impl<X, Y> Plot<X, Y>
where
    X: ScalarRange,
    Y: ScalarGroup,
{
    fn to_band_drawer(&self) -> BandDrawer {
        BandDrawer {
            points: self
                .data
                .iter()
                .map(|(x, y)| (x.to_range(), y.to_group()))
                .collect::<Vec<_>>(),
        }
    }
}

/// Staircase bands between consecutive cumulative curves
#[derive(Debug)]
struct BandDrawer {
    points: Vec<((i64, i64), Vec<i64>)>,
}

use svg::{
    node::element::{path::Data, Line, Path},
    Document,
};

impl BandDrawer {
    fn render(&self, file: &str) -> std::io::Result<()> {
        let (xmin, ymin, width, height) = {
            let mut xmin = i64::MAX;
            let mut ymin = i64::MAX;
            let mut xmax = i64::MIN;
            let mut ymax = i64::MIN;
            for ((start, end), points) in &self.points {
                xmin = xmin.min(*start).min(*end);
                xmax = xmax.max(*start).max(*end);
                for pt in points {
                    ymin = ymin.min(*pt);
                    ymax = ymax.max(*pt);
                }
            }
            // a projection of 0 every day still spans one unit
            (xmin, ymin, (xmax - xmin).max(1), (ymax - ymin).max(1))
        };
        let fheight = 700.0;
        let fwidth = 1000.0;
        let stroke_width = 2.0;
        let margin = 20.0;
        let resize_x = |x| (x - xmin) as f64 / width as f64 * fwidth;
        let resize_y = |y| (height - (y - ymin)) as f64 / height as f64 * fheight;
        let mut groups = Vec::new();
        let group_size = self.points[0].1.len();
        for i in 0..group_size - 1 {
            groups.push(
                Data::new().move_to((resize_x(self.points[0].0 .0), resize_y(self.points[0].1[i]))),
            );
        }
        // forward along the lower curve of each band
        let groups = self.points.iter().fold(groups, |gr, ((start, end), points)| {
            gr.into_iter()
                .enumerate()
                .map(|(i, gr)| {
                    gr.line_to((resize_x(*start), resize_y(points[i])))
                        .line_to((resize_x(*end), resize_y(points[i])))
                })
                .collect::<Vec<_>>()
        });
        // and back along the upper curve
        let groups = self
            .points
            .iter()
            .rev()
            .fold(groups, |gr, ((start, end), points)| {
                gr.into_iter()
                    .enumerate()
                    .map(|(i, gr)| {
                        gr.line_to((resize_x(*end), resize_y(points[i + 1])))
                            .line_to((resize_x(*start), resize_y(points[i + 1])))
                    })
                    .collect::<Vec<_>>()
            });
        let paths = groups.into_iter().enumerate().map(|(i, gr)| {
            Path::new()
                .set("fill", COLORS[i % COLORS.len()])
                .set("d", gr.close())
        });
        let yaxis = Line::new()
            .set("x1", 0.0)
            .set("x2", 0.0)
            .set("y1", 0.0)
            .set("y2", fheight)
            .set("stroke", "black")
            .set("stroke-width", stroke_width);
        let xaxis = Line::new()
            .set("x1", 0.0)
            .set("x2", fwidth)
            .set("y1", resize_y(0))
            .set("y2", resize_y(0))
            .set("stroke", "black")
            .set("stroke-width", stroke_width);
        let document = paths
            .into_iter()
            .fold(Document::new(), |doc, path| doc.add(path))
            .add(yaxis)
            .add(xaxis)
            .set(
                "viewBox",
                (-margin, -margin, fwidth + 2.0 * margin, fheight + 2.0 * margin),
            );
        svg::save(file, &document)
    }
}

/// Spending first, savings band on top of it
const COLORS: &[&str] = &["red", "green"];
