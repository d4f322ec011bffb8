/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(actual) => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual=Ok({:?})", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Err` and checks it with `$pred`, e.g.
/// `assert_err_is!(res, Error::is_invalid_combination)`.
#[macro_export]
macro_rules! assert_err_is {
    ($e:expr, $pred:expr) => {{
        let err = $crate::assert_err!($e);
        assert!(($pred)(&err), "unexpected error kind; err={err}");
        err
    }};
}

/// Unwraps an `Ok`, panicking with the error's display otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(err) => {
                use std::fmt::Write;
                let mut msg = format!("expected `Ok`; actual=Err({})", err);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}
