use std::panic;

pub mod proof;
pub mod tree;

#[napi]
pub fn init() {
    panic::set_hook(Box::new(|_| {}));
    let _ = env_logger::try_init();
}

pub(crate) fn to_napi_error(err: anyhow::Error) -> napi::Error {
    napi::Error::from_reason(format!("{err:#}"))
}
