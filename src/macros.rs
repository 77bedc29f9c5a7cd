/// Builds a [`ParamMap`](crate::ParamMap) from `name => value` pairs.
///
/// Values go through `ParamValue::from`, so anything with a `From` impl works.
///
/// ```rust
/// use param_ident::{params, ParamValue};
///
/// let p = params! { "lag" => 3, "f_agg" => "mean", "normalize" => true };
/// assert_eq!(p.len(), 3);
/// assert_eq!(p.get("f_agg"), Some(&ParamValue::from("mean")));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::ParamMap::new()
    };

    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::ParamMap::new();
        $(
            params.insert(::std::string::ToString::to_string(&$name), $crate::ParamValue::from($value));
        )+
        params
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Number, ParamMap, ParamValue};

    #[test]
    fn test_params_macro_empty() {
        assert_eq!(params! {}, ParamMap::new());
    }

    #[test]
    fn test_params_macro_values() {
        let p = params! {
            "n" => 3,
            "q" => 0.5,
            "s" => "abs",
            "lags" => vec![ParamValue::from(1), ParamValue::from(2)],
        };

        let names: Vec<_> = p.keys().cloned().collect();
        assert_eq!(names, vec!["n", "q", "s", "lags"]);
        assert_eq!(p.get("n"), Some(&ParamValue::Number(Number::Integer(3))));
        assert_eq!(p.get("q"), Some(&ParamValue::Number(Number::Float(0.5))));
        assert_eq!(p.get("s"), Some(&ParamValue::Str("abs".to_string())));
        assert_eq!(
            p.get("lags"),
            Some(&ParamValue::List(vec![ParamValue::from(1), ParamValue::from(2)]))
        );
    }

    #[test]
    fn test_params_macro_later_entries_win() {
        let p = params! { "a" => 1, "a" => 2 };
        assert_eq!(p.len(), 1);
        assert_eq!(p.get("a"), Some(&ParamValue::from(2)));
    }
}
