use abacus_translator::{SegmentReport, Translation};
use chrono::NaiveDate;

mod ansi {
    const RESET: &str = "\x1b[0m";

    /// Roles in the segment report, each mapped to one SGR code.
    #[derive(Clone, Copy)]
    pub enum Tone {
        Heading,
        Rule,
        Ok,
        Failed,
        Note,
        Muted,
        Frame,
        Strong,
    }

    impl Tone {
        fn code(self) -> &'static str {
            match self {
                Tone::Heading => "\x1b[1;36m",
                Tone::Rule => "\x1b[34m",
                Tone::Ok => "\x1b[1;32m",
                Tone::Failed => "\x1b[31m",
                Tone::Note => "\x1b[33m",
                Tone::Muted => "\x1b[2m",
                Tone::Frame => "\x1b[90m",
                Tone::Strong => "\x1b[1m",
            }
        }
    }

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn tone(&self, s: impl AsRef<str>, tone: Tone) -> String {
            if self.enabled { format!("{}{}{RESET}", tone.code(), s.as_ref()) } else { s.as_ref().to_string() }
        }
    }
}

use ansi::Tone;

pub fn print_run(res: &Translation, departure: Option<NaiveDate>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.tone(format!("⚙  Translating: \"{}\"", res.text), Tone::Heading));

    let departure = departure.map(|d| d.to_string()).unwrap_or_else(|| "none".to_string());
    println!("  {} {}", palette.tone("departure:", Tone::Muted), palette.tone(departure, Tone::Note));

    println!("\n{}", palette.tone("━━━ Segments ━━━", Tone::Frame));
    if res.segments.is_empty() {
        println!("{}", palette.tone("  Empty input", Tone::Muted));
    } else {
        if res.multi_passenger {
            let note = format!("passenger separator found, {} segments", res.segments.len());
            println!("  {}", palette.tone(note, Tone::Muted));
        }
        for (idx, segment) in res.segments.iter().enumerate() {
            print_segment(idx, segment, &palette);
        }
    }

    println!("\n{}", palette.tone("━━━ Result ━━━", Tone::Frame));
    let result_tone = if res.has_failures() { Tone::Failed } else { Tone::Strong };
    println!("  {}", palette.tone(&res.output, result_tone));

    println!("\n{}", palette.tone("━━━ Timing ━━━", Tone::Frame));
    println!(
        "  Total: {}  │  Split: {}",
        palette.tone(format!("{:?}", res.elapsed()), Tone::Ok),
        palette.tone(format!("{:?}", res.metrics.split), Tone::Muted),
    );
    println!();
}

fn print_segment(idx: usize, segment: &SegmentReport, palette: &ansi::Palette) {
    let tone = if segment.failed { Tone::Failed } else { Tone::Ok };

    println!(
        "  {} {} {} {}",
        palette.tone(format!("[{idx}]"), Tone::Frame),
        segment.input,
        palette.tone("→", Tone::Muted),
        palette.tone(&segment.output, tone),
    );
    println!(
        "      {} {}  {} {}",
        palette.tone("rule:", Tone::Muted),
        palette.tone(segment.rule.as_deref().unwrap_or("<pass-through>"), Tone::Rule),
        palette.tone("│", Tone::Muted),
        palette.tone(format!("{:?}", segment.elapsed), Tone::Muted),
    );
}
