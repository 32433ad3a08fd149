//! Structured logging helpers.
//!
//! Every component tags its lines with a `component` field so JSON output can
//! be filtered per crate.

/// Log a company-related event with standard fields.
#[macro_export]
macro_rules! log_company_event {
    ($level:ident, $component:expr, $msg:expr, $company:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            company = %$company,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an account-related event with standard fields.
#[macro_export]
macro_rules! log_account_event {
    ($level:ident, $component:expr, $msg:expr, $account:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            account = %$account,
            $($($field)*,)?
            $msg
        )
    };
}
