use std::collections::BTreeMap;
use std::fmt;

fn get_category_and_title(name: &str) -> (String, String) {
    let mut parts = name.splitn(2, '/');
    let category = parts.next().unwrap_or("");
    let title = parts.next().unwrap_or("");
    (category.to_string(), title.to_string())
}

/// Collects counter values and formats them grouped by category.
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    counters: BTreeMap<String, u64>,
    percentages: BTreeMap<String, (u64, u64)>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        StatsAccumulator::default()
    }

    pub fn report_counter(&mut self, name: &str, val: u64) {
        let counter = self.counters.entry(name.to_string()).or_insert(0);
        *counter += val;
    }

    pub fn report_percentage(&mut self, name: &str, num: u64, denom: u64) {
        let p = self.percentages.entry(name.to_string()).or_insert((0, 0));
        p.0 += num;
        p.1 += denom;
    }
}

impl fmt::Display for StatsAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut to_print: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in self.counters.iter() {
            if *value == 0 {
                continue;
            }
            let (category, title) = get_category_and_title(name);
            to_print
                .entry(category)
                .or_default()
                .push(format!("{:<42}               {:12}", title, value));
        }
        for (name, (num, denom)) in self.percentages.iter() {
            if *denom == 0 {
                continue;
            }
            let (category, title) = get_category_and_title(name);
            let pct = 100.0 * (*num as f64) / (*denom as f64);
            to_print.entry(category).or_default().push(format!(
                "{:<42}{:12} / {:12} ({:.2}%)",
                title, num, denom, pct
            ));
        }
        writeln!(f, "Statistics:")?;
        for (category, items) in to_print.iter() {
            writeln!(f, "  {}", category)?;
            for item in items.iter() {
                writeln!(f, "    {}", item)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut accum = StatsAccumulator::new();
        accum.report_counter("Integrator/Camera rays traced", 10);
        accum.report_percentage("Integrator/Samples with NaN radiance", 1, 4);
        let s = accum.to_string();
        assert!(s.contains("Integrator"));
        assert!(s.contains("Camera rays traced"));
        assert!(s.contains("25.00%"));
    }
}
