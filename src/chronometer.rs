use std::time::Instant;

#[derive(Clone, Copy)]
pub struct Chronometer {
    start: Instant,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> String {
        format_millis(self.start.elapsed().as_millis())
    }
}

fn format_millis(elapsed: u128) -> String {
    format!("{:02}:{:02}.{:03}", elapsed / 60000, (elapsed % 60000) / 1000, elapsed % 1000)
}

#[cfg(test)]
mod tests {
    #[test]
    fn format_millis() {
        assert_eq!(super::format_millis(0), "00:00.000");
        assert_eq!(super::format_millis(61_042), "01:01.042");
        assert_eq!(super::format_millis(3_599_999), "59:59.999");
    }
}
