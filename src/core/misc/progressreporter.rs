use indicatif::*;

pub struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total_work: usize, title: &str, quiet: bool) -> Self {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total_work as u64)
        };
        let template = format!("{{spinner:.bold.green}} {}: ", title)
            + "[{wide_bar:.cyan}] {pos}/{len} ({elapsed_precise}|{eta_precise}) ";
        if let Ok(style) = ProgressStyle::with_template(&template) {
            pb.set_style(style.progress_chars("█▇▆▅▄▃▂▁  "));
        }
        pb.tick();
        ProgressReporter { pb }
    }

    pub fn update(&self, num: usize) {
        if num != 0 {
            self.pb.inc(num as u64);
        }
    }

    pub fn done(&self) {
        self.pb.finish();
    }
}
