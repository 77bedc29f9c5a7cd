//! Identifier Format
//!
//! This module documents the flat identifier format read and written by the
//! codec.
//!
//! # Overview
//!
//! A feature column name carries the configuration that produced it:
//!
//! ```text
//! <kind>__<function>[__<name>_<value>]*
//! ```
//!
//! - `kind` and `function` are owned by the caller and never interpreted
//! - every further segment holds one parameter
//!
//! # Segments
//!
//! Segments are joined by `__`. Splitting is plain left-to-right and without
//! overlap, so `a___b` splits into `a` and `_b`.
//!
//! | Identifier | Segments | Parameters |
//! |------------|----------|------------|
//! | `x__mean` | `x`, `mean` | absent |
//! | `x__lag__lag_3` | `x`, `lag`, `lag_3` | `{lag: 3}` |
//! | `x__agg__f_agg_"max"__maxlag_40` | 4 segments | `{f_agg: 'max', maxlag: 40}` |
//!
//! # Parameter Segments
//!
//! A parameter segment is cut at its **last** `_`:
//!
//! ```text
//! chunk_len_5   ->  name "chunk_len", value "5"
//! a_b_1         ->  name "a_b",       value "1"
//! novalue       ->  error: no cut point
//! ```
//!
//! Names may contain `_`; values may not. Every segment is cut before any value
//! is parsed, so a segment without `_` is reported ahead of a bad value.
//!
//! # Values
//!
//! | Text | Value |
//! |------|-------|
//! | `nan`, `NaN` | NaN |
//! | `inf`, `Inf` | positive infinity |
//! | `-inf`, `-INF` | negative infinity |
//! | `3`, `-3`, `0x1f` | integer (unbounded) |
//! | `0.5`, `1e-05`, `2.` | float |
//! | `True`, `False`, `None` | boolean, none |
//! | `"abs"`, `'abs'` | string |
//! | `(1, 2)`, `[1, 2]`, `{'a': 1}`, `{1, 2}` | tuple, list, dict, set |
//!
//! The three special tokens are matched case-insensitively and only as the
//! whole value; every other value must be a literal (see
//! [`parse_literal`](crate::parse_literal)).
//!
//! # Encoding
//!
//! - parameters are sorted by name (byte order)
//! - strings are wrapped in `"` with no escaping
//! - everything else uses its literal rendering
//! - an empty parameter set encodes to an empty string
//!
//! ```text
//! {b: 1, a: 2}           ->  a_2__b_1
//! {name: 'hello'}        ->  name_"hello"
//! {q: 0.1, w: (2, 5)}    ->  q_0.1__w_(2, 5)
//! ```
//!
//! # Limitations
//!
//! - A string containing `"` or `_` does not decode back to itself; one
//!   containing `__` splits into extra segments.
//! - A backslash in a string is written as-is and read back as an escape, so
//!   `a\nb` decodes with a real newline.
//! - `nan`/`inf` nested inside a container encode fine but do not decode.
//! - Parameter names are not validated.

// This module contains only documentation; no implementation code
