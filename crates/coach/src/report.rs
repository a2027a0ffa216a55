use {
    crate::{Metrics, SessionEvent, SessionSummary},
    std::fmt,
};

/// `HH:MM:SS`, negative or non-finite input shown as zero.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout Summary: {}", self.kind)?;
        match self.metrics {
            Metrics::Reps {
                total,
                valid,
                form_percentage,
            } => {
                writeln!(f, "  Total Reps Attempted: {}", total)?;
                writeln!(f, "  Reps with OK Form:    {}", valid)?;
                writeln!(f, "  Form Quality:         {:.1}%", form_percentage)?;
            }
            Metrics::Hold {
                held_seconds,
                breaks,
            } => {
                writeln!(f, "  Total Time Held:      {:.1}s", held_seconds)?;
                writeln!(f, "  Form Breaks:          {}", breaks)?;
            }
        }
        writeln!(f, "  Total Session Time:   {}", format_time(self.session_seconds))?;
        write!(f, "  Workout Rating (0-10): {:.1}", self.rating)?;

        let reps: Vec<_> = self.events.iter().filter_map(SessionEvent::as_rep).collect();
        if !reps.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            write!(
                f,
                "  {:>5}  {:<11}  {:>10}  {:>8}",
                "Rep #", "Form Status", "Min Angle", "Duration"
            )?;
            for rep in reps {
                writeln!(f)?;
                write!(
                    f,
                    "  {:>5}  {:<11}  {:>6.1} deg  {:>6.1} s",
                    rep.rep,
                    if rep.form_ok { "OK" } else { "BAD FORM" },
                    rep.min_angle,
                    rep.duration
                )?;
            }
        }
        Ok(())
    }
}
