//! Decoding and re-encoding feature column names.
//!
//! Run with: cargo run --example column_names

use param_ident::{decode_identifier, encode, params, to_params, ParamValue};
use serde::Serialize;

#[derive(Serialize)]
struct ChangeQuantiles {
    ql: f64,
    qh: f64,
    isabs: bool,
    f_agg: String,
}

fn main() -> Result<(), param_ident::Error> {
    println!("=== Decoding column names ===\n");

    let columns = [
        "temperature__mean",
        "temperature__autocorrelation__lag_3",
        "temperature__agg_linear_trend__attr_\"slope\"__chunk_len_5__f_agg_\"max\"",
        "temperature__cwt_coefficients__coeff_0__w_2__widths_(2, 5, 10, 20)",
        "temperature__range_count__max_inf__min_-inf",
    ];

    for column in columns {
        println!("{}", column);
        match decode_identifier(column)? {
            None => println!("  (no parameters)"),
            Some(params) => {
                for (name, value) in &params {
                    println!("  {} = {}", name, value);
                }
            }
        }
    }

    println!("\n=== Encoding parameter sets ===\n");

    let settings = ChangeQuantiles {
        ql: 0.0,
        qh: 0.2,
        isabs: false,
        f_agg: "var".to_string(),
    };
    let params = to_params(&settings)?;
    println!("temperature__change_quantiles__{}", encode(&params));

    let params = params! {
        "lags" => vec![ParamValue::from(1), ParamValue::from(2)],
        "threshold" => f64::NAN,
    };
    println!("temperature__custom__{}", encode(&params));

    println!("\n=== Malformed input ===\n");

    if let Err(e) = decode_identifier("temperature__quantile__q") {
        println!("error: {}", e);
    }

    Ok(())
}
