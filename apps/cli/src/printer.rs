use std::io::{self, Write};
use view::{ClipView, EpisodeView, ResultsView};

const INDENT: &str = "   ";

pub fn write_results(out: &mut impl Write, results: &ResultsView) -> io::Result<()> {
    match results {
        ResultsView::Episodes(episodes) => {
            for (idx, episode) in episodes.iter().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                write_episode(out, idx + 1, episode)?;
            }
            Ok(())
        }
        ResultsView::Empty => writeln!(out, "No episodes matched"),
        ResultsView::Idle | ResultsView::Loading { .. } => Ok(()),
    }
}

fn write_episode(out: &mut impl Write, number: usize, episode: &EpisodeView) -> io::Result<()> {
    writeln!(out, "{number}. {} ({})", episode.episode_name, episode.show_name)?;
    if let Some(summary) = &episode.summary {
        writeln!(out, "{INDENT}{summary}")?;
    }
    writeln!(out, "{INDENT}Play: {}", episode.play_url)?;

    writeln!(out, "{INDENT}Most Relevant Clip")?;
    write_clip(out, &episode.most_relevant)?;

    if !episode.others.is_empty() {
        writeln!(out, "{INDENT}Other Relevant Clips")?;
        for clip in &episode.others {
            write_clip(out, clip)?;
        }
    }
    Ok(())
}

fn write_clip(out: &mut impl Write, clip: &ClipView) -> io::Result<()> {
    write!(out, "{INDENT}{INDENT}[{}]", clip.timestamp)?;
    if let Some(score) = &clip.score_label {
        write!(out, " ({score})")?;
    }
    writeln!(out, " {}", clip.transcript.trim())?;
    writeln!(out, "{INDENT}{INDENT}{INDENT}{}", clip.url)
}
