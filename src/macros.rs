#[macro_export]
macro_rules! err {
    ($error:expr) => [{
        Result::Err(anyhow::anyhow!($error))
    }];
    ($fmt:expr, $($arg:tt)+) => [{
        Result::Err(anyhow::anyhow!($fmt, $($arg)+))
    }];
}
