pub struct ShowOptions {
    pub bypass: bool,
    pub grid: bool,
    pub labels: bool,
    pub response_plot: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            bypass: true,
            grid: true,
            labels: true,
            response_plot: false,
        }
    }
}

impl ShowOptions {
    pub fn show_curves(&self) -> bool {
        !self.bypass
    }

    pub fn show_response_plot(&self) -> bool {
        self.response_plot && !self.bypass
    }
}
