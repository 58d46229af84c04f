macro_rules! bail {
    ($e:expr) => {
        return Err($e.into());
    };
}
pub(crate) use bail;
