use std::io::Write;

/// Abstract the host environment's output channel to enable testing.
///
/// The batch runner mirrors every evaluation record to this channel; in
/// production it is standard output, in tests an in-memory buffer.
pub trait Host {
    /// Where to mirror evaluation records (e.g., stdout).
    fn output(&mut self) -> impl Write;
}

/// Test host that captures output to an in-memory buffer
#[cfg(test)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
}

#[cfg(test)]
impl TestHost {
    pub const fn new() -> Self {
        Self { output_buf: Vec::new() }
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }
}
