use std::path::Path;

pub fn run(input: &Path, slots: usize) -> anyhow::Result<()> {
    let script = super::read_text(input)?;
    print!("{}", render(&script, slots)?);
    Ok(())
}

fn render(script: &str, slots: usize) -> anyhow::Result<String> {
    let mut out = String::new();
    for segment in hypr_speaker_text::parse_script(script)? {
        let slot = segment.speaker.slot(slots)?;
        out.push_str(&format!("{} [voice {}]: {}\n", segment.speaker, slot + 1, segment.text));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_clamp_to_configured_voices() {
        let rendered = render("S1: Hi\nspeaker 3: Hello\nS2: Bye", 2).unwrap();
        assert_eq!(
            rendered,
            "Speaker1 [voice 1]: Hi\nSpeaker3 [voice 2]: Hello\nSpeaker2 [voice 2]: Bye\n"
        );
    }

    #[test]
    fn prose_is_rejected() {
        assert!(render("no speakers here", 2).is_err());
        assert!(render("S1: Hi", 0).is_err());
    }
}
