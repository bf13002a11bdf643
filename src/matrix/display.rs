use std::fmt;

use super::{Matrix, Real};

/// One bracketed row per line. A precision given to the formatter applies to every element.
impl<N: Real> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.columns == 0 {
            return write!(f, "[]");
        }
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.columns {
                if j > 0 {
                    write!(f, ", ")?;
                }
                let v = self.data[i * self.columns + j];
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
