use crate::chart::data::{Interpretation, MoonNakshatra};
use crate::vedic::Rashi;

/// Fixed-template reading of the lagna, Moon, birth nakshatra and Sun.
pub fn interpret(
    ascendant: Rashi,
    moon: Rashi,
    sun: Rashi,
    moon_nakshatra: &MoonNakshatra,
) -> Interpretation {
    Interpretation {
        ascendant_sign: format!(
            "Your rising sign (Lagna) is {ascendant}, which shapes your outward \
             personality and life approach."
        ),
        moon_sign: format!("Your Moon is in {moon}, influencing your emotional nature and mind."),
        moon_nakshatra: format!(
            "Your birth Nakshatra is {} (Pada {}), ruled by {}.",
            moon_nakshatra.name, moon_nakshatra.pada, moon_nakshatra.lord
        ),
        sun_sign: format!("Your Sun is in {sun}, representing your soul and core identity."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vedic::Graha;

    #[test]
    fn test_templates() {
        let nak = MoonNakshatra {
            name: "Pushya".to_string(),
            pada: 2,
            lord: Graha::Saturn,
        };
        let text = interpret(Rashi::Leo, Rashi::Cancer, Rashi::Capricorn, &nak);
        assert_eq!(
            text.ascendant_sign,
            "Your rising sign (Lagna) is Leo, which shapes your outward personality \
             and life approach."
        );
        assert_eq!(
            text.moon_sign,
            "Your Moon is in Cancer, influencing your emotional nature and mind."
        );
        assert_eq!(
            text.moon_nakshatra,
            "Your birth Nakshatra is Pushya (Pada 2), ruled by Saturn."
        );
        assert_eq!(
            text.sun_sign,
            "Your Sun is in Capricorn, representing your soul and core identity."
        );
    }
}
