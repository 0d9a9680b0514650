pub(crate) mod convert;
pub(crate) mod dry_run;

pub(crate) use convert::run_convert;
pub(crate) use dry_run::run_dry_run;
