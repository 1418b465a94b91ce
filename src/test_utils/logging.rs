use std::time::Instant;

/// Bracketed progress lines for longer tests, printed with `--nocapture`.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
}

impl TestLogger {
    pub fn new(test_name: &str) -> Self {
        let separator = "=".repeat(60);
        println!("\n{separator}");
        println!("[TEST START] {test_name}");
        println!("{separator}");
        Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn log_input<T: std::fmt::Debug>(&self, name: &str, value: &T) {
        println!("[INPUT] {name}: {value:?}");
    }

    pub fn log_expected<T: std::fmt::Debug>(&self, value: &T) {
        println!("[EXPECTED] {value:?}");
    }

    pub fn log_actual<T: std::fmt::Debug>(&self, value: &T) {
        println!("[ACTUAL] {value:?}");
    }

    pub fn pass(&self) {
        let elapsed = self.start_time.elapsed();
        println!("[RESULT] {} PASSED in {elapsed:?}", self.test_name);
        println!("{}\n", "=".repeat(60));
    }
}
