//! The closed registry of atomic functions.

/// Every atomic function known to the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Square,
    SquareAbs,
    SquarePos,
    SumSquare,
    SumSquareAbs,
    SumSquarePos,
    LogSumExp,
    Max,
    Min,
    Log,
    InvPos,
    Pos,
    Sum,
    GeoMean,
    Sqrt,
    LogNormcdf,
    Exp,
    Norm,
    NormLargest,
    Abs,
    Berhu,
    Huber,
    HuberPos,
    HuberCirc,
    Entr,
    KlDiv,
    RelEntr,
    PowP,
    PowAbs,
    PowPos,
    QuadOverLin,
    SumLargest,
    SumSmallest,
}

impl AtomKind {
    /// Look up an atom by its surface name. `pow` is accepted as an alias
    /// for `pow_p`.
    pub fn from_name(name: &str) -> Option<AtomKind> {
        let kind = match name {
            "square" => AtomKind::Square,
            "square_abs" => AtomKind::SquareAbs,
            "square_pos" => AtomKind::SquarePos,
            "sum_square" => AtomKind::SumSquare,
            "sum_square_abs" => AtomKind::SumSquareAbs,
            "sum_square_pos" => AtomKind::SumSquarePos,
            "log_sum_exp" => AtomKind::LogSumExp,
            "max" => AtomKind::Max,
            "min" => AtomKind::Min,
            "log" => AtomKind::Log,
            "inv_pos" => AtomKind::InvPos,
            "pos" => AtomKind::Pos,
            "sum" => AtomKind::Sum,
            "geo_mean" => AtomKind::GeoMean,
            "sqrt" => AtomKind::Sqrt,
            "log_normcdf" => AtomKind::LogNormcdf,
            "exp" => AtomKind::Exp,
            "norm" => AtomKind::Norm,
            "norm_largest" => AtomKind::NormLargest,
            "abs" => AtomKind::Abs,
            "berhu" => AtomKind::Berhu,
            "huber" => AtomKind::Huber,
            "huber_pos" => AtomKind::HuberPos,
            "huber_circ" => AtomKind::HuberCirc,
            "entr" => AtomKind::Entr,
            "kl_div" => AtomKind::KlDiv,
            "rel_entr" => AtomKind::RelEntr,
            "pow" | "pow_p" => AtomKind::PowP,
            "pow_abs" => AtomKind::PowAbs,
            "pow_pos" => AtomKind::PowPos,
            "quad_over_lin" => AtomKind::QuadOverLin,
            "sum_largest" => AtomKind::SumLargest,
            "sum_smallest" => AtomKind::SumSmallest,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical name, as used in fault messages.
    pub fn name(self) -> &'static str {
        match self {
            AtomKind::Square => "square",
            AtomKind::SquareAbs => "square_abs",
            AtomKind::SquarePos => "square_pos",
            AtomKind::SumSquare => "sum_square",
            AtomKind::SumSquareAbs => "sum_square_abs",
            AtomKind::SumSquarePos => "sum_square_pos",
            AtomKind::LogSumExp => "log_sum_exp",
            AtomKind::Max => "max",
            AtomKind::Min => "min",
            AtomKind::Log => "log",
            AtomKind::InvPos => "inv_pos",
            AtomKind::Pos => "pos",
            AtomKind::Sum => "sum",
            AtomKind::GeoMean => "geo_mean",
            AtomKind::Sqrt => "sqrt",
            AtomKind::LogNormcdf => "log_normcdf",
            AtomKind::Exp => "exp",
            AtomKind::Norm => "norm",
            AtomKind::NormLargest => "norm_largest",
            AtomKind::Abs => "abs",
            AtomKind::Berhu => "berhu",
            AtomKind::Huber => "huber",
            AtomKind::HuberPos => "huber_pos",
            AtomKind::HuberCirc => "huber_circ",
            AtomKind::Entr => "entr",
            AtomKind::KlDiv => "kl_div",
            AtomKind::RelEntr => "rel_entr",
            AtomKind::PowP => "pow_p",
            AtomKind::PowAbs => "pow_abs",
            AtomKind::PowPos => "pow_pos",
            AtomKind::QuadOverLin => "quad_over_lin",
            AtomKind::SumLargest => "sum_largest",
            AtomKind::SumSmallest => "sum_smallest",
        }
    }

    /// Whether a name is reserved for an atomic function. Declarations may
    /// not shadow these.
    pub fn is_atom_name(name: &str) -> bool {
        AtomKind::from_name(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(AtomKind::from_name("square"), Some(AtomKind::Square));
        assert_eq!(AtomKind::from_name("pow"), Some(AtomKind::PowP));
        assert_eq!(AtomKind::from_name("pow_p"), Some(AtomKind::PowP));
        assert_eq!(AtomKind::from_name("powp"), None);
        assert!(AtomKind::is_atom_name("quad_over_lin"));
        assert!(!AtomKind::is_atom_name("x"));
    }
}
