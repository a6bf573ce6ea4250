macro_rules! config {
    ($data:expr) => {{ $data.config.read().await.clone() }};
}

pub(crate) use config;
