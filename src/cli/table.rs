use num_traits::FromPrimitive;
use std::fmt;

use crate::calc::{amount::Amount, horizon::Horizon, projection::Projection};

/// Renders a projection as a box-drawing table, one row per horizon
///
/// With a target projection attached, two extra columns show what the
/// reduced habit would cost and what the difference amounts to.
pub struct Table<'d> {
    current: &'d Projection,
    target: Option<&'d Projection>,
    title: Option<String>,
}

struct BoxFmt {
    width: usize,
    text: String,
}

struct ColFmt {
    width: usize,
    label: BoxFmt,
    boxes: Vec<BoxFmt>,
}

struct GridFmt {
    labels: ColFmt,
    columns: Vec<ColFmt>,
}

impl<'d> Table<'d> {
    pub fn from(current: &'d Projection) -> Self {
        Self {
            current,
            target: None,
            title: None,
        }
    }

    pub fn with_target(mut self, target: &'d Projection) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_title<S>(mut self, title: S) -> Self
    where
        S: ToString,
    {
        self.title = Some(title.to_string());
        self
    }

    fn to_formatter(&self) -> GridFmt {
        let mut headers = vec![
            BoxFmt::from(String::from("Cost")),
            BoxFmt::from(String::from("Cigarettes")),
        ];
        if self.target.is_some() {
            headers.push(BoxFmt::from(String::from("Target")));
            headers.push(BoxFmt::from(String::from("Savings")));
        }
        let cols = headers
            .into_iter()
            .map(ColFmt::with_label)
            .collect::<Vec<_>>();
        let mut grid = GridFmt::with_columns(cols);
        for i in 0..Horizon::COUNT {
            let h = Horizon::from_usize(i).unwrap();
            let mut line = vec![
                BoxFmt::amount(self.current.cost(h)),
                BoxFmt::count(self.current.cigarettes(h)),
            ];
            if let Some(target) = self.target {
                line.push(BoxFmt::amount(target.cost(h)));
                line.push(BoxFmt::amount(self.current.savings_over(target, h)));
            }
            grid.push_line(BoxFmt::from(String::from(h.label())), line);
        }
        grid
    }
}

impl BoxFmt {
    fn from(text: String) -> Self {
        let width = text.chars().count();
        Self { text, width }
    }

    fn amount(a: Amount) -> Self {
        Self::from(format!("{}", a))
    }

    fn count(c: f64) -> Self {
        Self::from(format!("{}", c))
    }
}

impl ColFmt {
    fn with_label(label: BoxFmt) -> Self {
        Self {
            width: label.width,
            label,
            boxes: Vec::new(),
        }
    }

    fn push(&mut self, b: BoxFmt) {
        self.width = self.width.max(b.width);
        self.boxes.push(b);
    }
}

impl GridFmt {
    fn with_columns(columns: Vec<ColFmt>) -> Self {
        Self {
            labels: ColFmt::with_label(BoxFmt::from(String::new())),
            columns,
        }
    }

    fn push_line(&mut self, label: BoxFmt, boxes: Vec<BoxFmt>) {
        self.labels.push(label);
        for (i, b) in boxes.into_iter().enumerate() {
            self.columns[i].push(b);
        }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{}", title)?;
        }
        write!(f, "{}", self.to_formatter())
    }
}

impl fmt::Display for GridFmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // upper border
        write!(f, "{}", ULCORNER)?;
        self.labels.hline(f)?;
        for c in &self.columns {
            write!(f, "{}", LOJOIN)?;
            c.hline(f)?;
        }
        writeln!(f, "{}", URCORNER)?;
        // header line
        write!(f, "{}", VLINE)?;
        self.labels.write_label(f)?;
        for c in &self.columns {
            write!(f, "{}", VLINE)?;
            c.write_label(f)?;
        }
        writeln!(f, "{}", VLINE)?;
        // separator
        write!(f, "{}", RTJOIN)?;
        self.labels.hline(f)?;
        for c in &self.columns {
            write!(f, "{}", CROSS)?;
            c.hline(f)?;
        }
        writeln!(f, "{}", LTJOIN)?;

        // main block
        for idx in 0..self.labels.len() {
            write!(f, "{}", VLINE)?;
            self.labels.write_item(f, idx, false)?;
            for c in &self.columns {
                write!(f, "{}", VLINE)?;
                c.write_item(f, idx, true)?;
            }
            writeln!(f, "{}", VLINE)?;
        }
        // lower border
        write!(f, "{}", DLCORNER)?;
        self.labels.hline(f)?;
        for c in &self.columns {
            write!(f, "{}", HIJOIN)?;
            c.hline(f)?;
        }
        writeln!(f, "{}", DRCORNER)?;
        Ok(())
    }
}

impl ColFmt {
    fn write_label(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.label.write(f, self.width, true)
    }

    fn write_item(&self, f: &mut fmt::Formatter, idx: usize, right: bool) -> fmt::Result {
        self.boxes[idx].write(f, self.width, right)
    }

    fn len(&self) -> usize {
        self.boxes.len()
    }

    fn hline(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // the box-drawing character is 3 bytes long
        write!(f, "{}", &HLINE[..(self.width + 2) * 3])
    }
}

const PADDING: &str = "                                         ";
const HLINE: &str = "─────────────────────────────────────────";
const VLINE: &str = "│";
const ULCORNER: &str = "┌";
const URCORNER: &str = "┐";
const DLCORNER: &str = "└";
const DRCORNER: &str = "┘";
const LTJOIN: &str = "┤";
const RTJOIN: &str = "├";
const HIJOIN: &str = "┴";
const LOJOIN: &str = "┬";
const CROSS: &str = "┼";

impl BoxFmt {
    fn write(&self, f: &mut fmt::Formatter, width: usize, right: bool) -> fmt::Result {
        if right {
            write!(
                f,
                " {}{} ",
                &PADDING[..width.saturating_sub(self.width)],
                self.text
            )
        } else {
            write!(
                f,
                " {}{} ",
                self.text,
                &PADDING[..width.saturating_sub(self.width)]
            )
        }
    }
}
