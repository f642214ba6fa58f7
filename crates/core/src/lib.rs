//! Core units, constants, and shared primitives for the station keeping workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²). Used to turn Isp into exhaust velocity.
    pub const G0: f64 = 9.80665;
}

/// Length parsing and formatting for semi-major axis readouts.
pub mod units {
    use std::fmt;
    use std::str::FromStr;

    /// Length units offered when typing a target semi-major axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum LengthUnit {
        Km,
        #[default]
        Mm,
        Gm,
    }

    impl LengthUnit {
        /// Power of ten applied to a value typed in this unit.
        pub fn exponent(self) -> i32 {
            match self {
                LengthUnit::Km => 3,
                LengthUnit::Mm => 6,
                LengthUnit::Gm => 9,
            }
        }

        pub fn symbol(self) -> &'static str {
            match self {
                LengthUnit::Km => "km",
                LengthUnit::Mm => "Mm",
                LengthUnit::Gm => "Gm",
            }
        }
    }

    impl fmt::Display for LengthUnit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.symbol())
        }
    }

    impl FromStr for LengthUnit {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "km" | "KM" | "Km" => Ok(LengthUnit::Km),
                "Mm" | "mm" | "MM" => Ok(LengthUnit::Mm),
                "Gm" | "gm" | "GM" => Ok(LengthUnit::Gm),
                other => Err(format!("unknown length unit '{other}'")),
            }
        }
    }

    /// Keep only the digits and the first decimal point of `text`.
    ///
    /// Anything else a user may type (signs, separators, letters) is dropped, mirroring a
    /// forgiving text field.
    pub fn sanitize_numeric(text: &str) -> String {
        let mut seen_point = false;
        text.chars()
            .filter(|c| {
                if c.is_ascii_digit() {
                    true
                } else if *c == '.' && !seen_point {
                    seen_point = true;
                    true
                } else {
                    false
                }
            })
            .collect()
    }

    /// Parse a user-typed length in `unit` into metres.
    ///
    /// Empty input (or a lone decimal point) parses as zero.
    pub fn parse_length(text: &str, unit: LengthUnit) -> f64 {
        let numeric = sanitize_numeric(text);
        if numeric.is_empty() || numeric == "." {
            return 0.0;
        }
        // The sanitized string is always a valid float literal ("12.", ".5", "007").
        numeric.parse::<f64>().unwrap_or(0.0) * 10f64.powi(unit.exponent())
    }

    const LENGTH_SUFFIXES: [&str; 5] = ["m", "km", "Mm", "Gm", "Tm"];

    /// Format a length in metres using the largest SI prefix up to tera, four significant digits.
    pub fn format_length(metres: f64) -> String {
        let mut value = metres;
        let mut level = 0;
        while value > 1_000.0 && level < 4 {
            value /= 1_000.0;
            level += 1;
        }
        format!("{} {}", format_significant(value, 4), LENGTH_SUFFIXES[level])
    }

    /// General-format a number with at most `digits` significant digits and no trailing zeros.
    ///
    /// The value is first taken to fifteen significant digits, then rounded half away from zero.
    pub fn format_significant(value: f64, digits: usize) -> String {
        if !value.is_finite() {
            return if value.is_nan() {
                "NaN".to_string()
            } else if value > 0.0 {
                "∞".to_string()
            } else {
                "-∞".to_string()
            };
        }
        if value == 0.0 {
            return "0".to_string();
        }

        let digits = digits.max(1);
        let scientific = format!("{:.14e}", value.abs());
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let mut exponent: i32 = exponent.parse().unwrap_or(0);
        let mut kept: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let round_up = kept.get(digits).is_some_and(|d| *d >= 5);
        kept.truncate(digits);
        if round_up {
            let mut carry = true;
            for d in kept.iter_mut().rev() {
                if *d == 9 {
                    *d = 0;
                } else {
                    *d += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                kept.insert(0, 1);
                kept.truncate(digits);
                exponent += 1;
            }
        }
        kept.resize(digits, 0);
        let text: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
        let sign = if value < 0.0 { "-" } else { "" };

        if exponent < -5 || exponent >= digits as i32 {
            let (head, tail) = text.split_at(1);
            let mantissa = format!("{head}.{tail}");
            let exp_sign = if exponent < 0 { '-' } else { '+' };
            return format!(
                "{sign}{}E{exp_sign}{:02}",
                trim_fraction(&mantissa),
                exponent.abs()
            );
        }

        let positional = if exponent >= 0 {
            let (int, frac) = text.split_at(exponent as usize + 1);
            format!("{int}.{frac}")
        } else {
            format!("0.{}{text}", "0".repeat((-exponent - 1) as usize))
        };
        format!("{sign}{}", trim_fraction(&positional))
    }

    fn trim_fraction(text: &str) -> &str {
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text
        }
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres or m/s depending on context.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_squared(v: &Vector3) -> f64 {
        dot(v, v)
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }
}
