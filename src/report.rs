use crate::error::SimError;
use crate::experiment::Curve;
use anyhow::Result;
use std::io::Write;

const RULE: &str = "---------------------------";

/// Write the table of the psychometric function governing the responses.
pub fn write_theoretical(out: &mut dyn Write, curve: &Curve) -> Result<()> {
    writeln!(out, "The following table shows the values")?;
    writeln!(out, "for the psychometric (Weibull) function governing")?;
    writeln!(out, "the subject's responses:")?;
    writeln!(out)?;
    write_table(out, curve)
}

/// Write the table of the proportions of correct responses.
pub fn write_empirical(out: &mut dyn Write, curve: &Curve, alternatives: usize) -> Result<()> {
    writeln!(out, "The following table shows the subject's")?;
    writeln!(out, "responses in a {alternatives}-AFC detection task:")?;
    writeln!(out)?;
    write_table(out, curve)
}

fn write_table(out: &mut dyn Write, curve: &Curve) -> Result<()> {
    if curve.stimuli.len() != curve.values.len() {
        return Err(SimError::Shape {
            expected: curve.stimuli.len(),
            found: curve.values.len(),
        }
        .into());
    }

    writeln!(out, "\tCONTRAST\tP(CORRECT)")?;
    writeln!(out, "{RULE}")?;
    for (i_row, (x, prob)) in curve.stimuli.iter().zip(curve.values.iter()).enumerate() {
        writeln!(out, "{}\t{x:.6}\t{prob:.6}", i_row + 1)?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn theoretical_table_layout() {
        let curve = Curve {
            stimuli: array![0.0, 0.05],
            values: array![0.5, 0.5000123],
        };
        let mut buf = Vec::new();
        write_theoretical(&mut buf, &curve).unwrap();
        let expected = String::new()
            + "The following table shows the values\n"
            + "for the psychometric (Weibull) function governing\n"
            + "the subject's responses:\n"
            + "\n"
            + "\tCONTRAST\tP(CORRECT)\n"
            + "---------------------------\n"
            + "1\t0.000000\t0.500000\n"
            + "2\t0.050000\t0.500012\n"
            + "---------------------------\n"
            + "\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn empirical_header_names_alternatives() {
        let curve = Curve {
            stimuli: array![0.5],
            values: array![0.76],
        };
        let mut buf = Vec::new();
        write_empirical(&mut buf, &curve, 4).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("The following table shows the subject's\nresponses in a 4-AFC"));
        assert!(text.contains("1\t0.500000\t0.760000\n"));
    }

    #[test]
    fn mismatched_curve_is_rejected() {
        let curve = Curve {
            stimuli: array![0.0, 0.05],
            values: array![0.5],
        };
        let mut buf = Vec::new();
        assert!(write_theoretical(&mut buf, &curve).is_err());
    }
}
