//! Human-readable rendering of evaluation results.

use hc_core::Real;
use hc_input::InputField;

use crate::calc_service::Evaluation;

/// Scientific notation with `digits` fractional mantissa digits and a signed,
/// at least two-digit exponent: `1.351e-05`.
pub fn format_scientific(value: Real, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{value:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// The two result lines shown to the user.
pub fn format_result(eval: &Evaluation) -> String {
    format!(
        "D_AB = {} cm²/s\nrelative error = {:.2} %",
        format_scientific(eval.result.d_ab, 3),
        eval.result.relative_error_percent
    )
}

/// Inputs, intermediate terms and result, one item per line.
pub fn format_breakdown(eval: &Evaluation) -> String {
    let mut lines = Vec::with_capacity(InputField::ALL.len() + 6);
    lines.push("Inputs:".to_string());
    for field in InputField::ALL {
        let unit = field.unit();
        let value = field.get(&eval.inputs);
        if unit.is_empty() {
            lines.push(format!("  {:<8} {}", field.key(), value));
        } else {
            lines.push(format!("  {:<8} {} {}", field.key(), value, unit));
        }
    }
    lines.push(format!("Model: {}", eval.model));
    lines.push(format!("  term1   = {:.6}", eval.term1));
    lines.push(format!("  term2   = {:.6}", eval.term2));
    lines.push(format!("  ln D_AB = {:.6}", eval.ln_d_ab));
    lines.push(format_result(eval));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc_service::evaluate_inputs;
    use hc_input::reference_inputs;

    #[test]
    fn scientific_pads_exponent() {
        assert_eq!(format_scientific(1.3509546566611805e-5, 3), "1.351e-05");
        assert_eq!(format_scientific(313.0, 3), "3.130e+02");
        assert_eq!(format_scientific(0.0, 3), "0.000e+00");
        assert_eq!(format_scientific(-2.5e-120, 1), "-2.5e-120");
    }

    #[test]
    fn scientific_passes_through_non_finite() {
        assert_eq!(format_scientific(f64::NAN, 3), "NaN");
        assert_eq!(format_scientific(f64::INFINITY, 3), "inf");
    }

    #[test]
    fn reference_result_lines() {
        let eval = evaluate_inputs(&reference_inputs()).unwrap();
        assert_eq!(
            format_result(&eval),
            "D_AB = 1.351e-05 cm²/s\nrelative error = 1.58 %"
        );
    }

    #[test]
    fn breakdown_lists_every_field() {
        let eval = evaluate_inputs(&reference_inputs()).unwrap();
        let text = format_breakdown(&eval);
        for field in InputField::ALL {
            assert!(text.contains(field.key()), "missing {field}");
        }
        assert!(text.contains("hsu-chen"));
        assert!(text.ends_with("relative error = 1.58 %"));
    }
}
