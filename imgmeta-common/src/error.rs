/// Error type that returns the input data alongside the error
///
/// Constructors like `new()` take ownership of the raw data. When they fail,
/// the data travels back inside the error such that the caller can keep
/// using the buffer, for example to probe it as a different format.
pub struct ErrorWithData<E: std::error::Error> {
    err: E,
    data: Vec<u8>,
}

impl<E: std::error::Error> ErrorWithData<E> {
    pub fn new(err: E, data: Vec<u8>) -> Self {
        Self { err, data }
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    /// Returns the data that the failed operation consumed
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn into_parts(self) -> (E, Vec<u8>) {
        (self.err, self.data)
    }

    pub fn map_err<F: std::error::Error>(self, op: impl FnOnce(E) -> F) -> ErrorWithData<F> {
        ErrorWithData {
            err: op(self.err),
            data: self.data,
        }
    }
}

impl<E: std::error::Error> std::fmt::Debug for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorWithData")
            .field("err", &self.err)
            .field("data", &format!("{} bytes", self.data.len()))
            .finish()
    }
}

impl<E: std::error::Error> std::fmt::Display for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl<E: std::error::Error> std::error::Error for ErrorWithData<E> {}
