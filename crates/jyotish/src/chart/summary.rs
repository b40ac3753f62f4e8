use std::fmt::Write;

use crate::chart::data::Chart;

const RULE: &str = "=======================================================";

/// Plain-text digest of a chart for grounding a conversational assistant.
pub fn chart_summary(chart: &Chart) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut out, chart);
    out
}

fn write_summary(out: &mut String, chart: &Chart) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "VEDIC BIRTH CHART SUMMARY (Sidereal/Lahiri Ayanamsa)")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    writeln!(out, "ASCENDANT (LAGNA):")?;
    writeln!(out, "   {} at {:.2}°", chart.ascendant.sign, chart.ascendant.degree)?;
    writeln!(out)?;

    writeln!(out, "PLANETARY POSITIONS:")?;
    for (graha, position) in &chart.planets {
        write!(
            out,
            "- {}: {} at {:.2}° in Nakshatra {}",
            graha, position.sign, position.degree, position.nakshatra
        )?;
        if let Some(strength) = chart.strengths.get(graha) {
            write!(out, " - Strength: {}", strength.status)?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(out, "MOON'S NAKSHATRA (Birth Star):")?;
    writeln!(
        out,
        "   {} - Pada {}",
        chart.moon_nakshatra.name, chart.moon_nakshatra.pada
    )?;
    writeln!(out, "   Nakshatra Lord: {}", chart.moon_nakshatra.lord)?;
    writeln!(out)?;

    writeln!(out, "KEY INTERPRETATIONS:")?;
    writeln!(out, "   - Ascendant Sign: {}", chart.interpretation.ascendant_sign)?;
    writeln!(out, "   - Moon Placement: {}", chart.interpretation.moon_sign)?;
    writeln!(out, "   - Sun Placement: {}", chart.interpretation.sun_sign)?;
    writeln!(out, "{RULE}")
}
