//! Plain-language description of each filter family.

use clap::Args;
use pilc_core::FilterFamily;

#[derive(Args)]
pub struct ExplainArgs {
    /// Filter family (butterworth|bw, chebyshev|ch, bessel|bs)
    #[arg(value_name = "FAMILY")]
    family: FilterFamily,
}

const PI_LADDER: &str = "\
The Pi ladder used here alternates shunt capacitors, which give high
frequencies an easy path to ground, with series inductors, which oppose fast
changes in current. Drawn out, the first three parts look like the Greek
letter Pi. Each extra part adds a pole: the stopband falls away faster, at
the cost of one more component to buy and tune.";

const BUTTERWORTH: &str = "\
Butterworth Low-Pass Filter
===========================

A low-pass filter passes signals below its cutoff and attenuates those above.

The Butterworth response is maximally flat: nothing in the passband is
boosted or cut until the signal gets close to cutoff, where the response is
exactly 3 dB down. The price of that flatness is a gentle knee, so energy
just above cutoff is only lightly attenuated.";

const BUTTERWORTH_CHOICE: &str = "\
Pick Butterworth when a flat passband matters more than a sharp transition.";

const CHEBYSHEV: &str = "\
Chebyshev (Type I) Low-Pass Filter
==================================

A low-pass filter passes signals below its cutoff and attenuates those above.

The Chebyshev response allows a small, controlled ripple in the passband and
uses it to buy a much steeper transition into the stopband. The ripple
setting is the trade: 0.1 dB keeps the passband almost flat, 1 dB gives a
noticeably sharper knee. At cutoff the response sits at the ripple depth,
not at -3 dB. Around 0.5 dB or less suits most work.

An equally terminated Pi ladder of this family needs an odd number of parts.
Even orders are rejected, rounded up, or built as asked depending on the
--even-order setting.";

const CHEBYSHEV_CHOICE: &str = "\
Pick Chebyshev when the sharpest cutoff for a given part count matters and a
little passband ripple is acceptable, as in transmitter harmonic filters.";

const BESSEL: &str = "\
Bessel (Thomson) Low-Pass Filter
================================

A low-pass filter passes signals below its cutoff and attenuates those above.

The Bessel response keeps group delay as constant as possible across the
passband, so every frequency in a pulse arrives at the same time and the
waveform keeps its shape with little overshoot or ringing. Its knee is the
softest of the three families. Component values come from published tables
for orders 2 through 9, scaled so the response is 3 dB down at cutoff.";

const BESSEL_CHOICE: &str = "\
Pick Bessel for pulses, data and other signals where shape matters more than
selectivity.";

/// Full explanation text for a family.
pub fn explanation(family: FilterFamily) -> String {
    let (intro, choice) = match family {
        FilterFamily::Butterworth => (BUTTERWORTH, BUTTERWORTH_CHOICE),
        FilterFamily::Chebyshev => (CHEBYSHEV, CHEBYSHEV_CHOICE),
        FilterFamily::Bessel => (BESSEL, BESSEL_CHOICE),
    };
    format!("{intro}\n\n{PI_LADDER}\n\n{choice}\n")
}

pub fn run(args: ExplainArgs) -> anyhow::Result<()> {
    println!();
    print!("{}", explanation(args.family));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_text() {
        for family in FilterFamily::ALL {
            let text = explanation(family);
            assert!(text.contains("Pi ladder"));
            assert!(text.to_lowercase().contains(family.name()));
        }
    }

    #[test]
    fn chebyshev_mentions_ripple_and_policy() {
        let text = explanation(FilterFamily::Chebyshev);
        assert!(text.contains("ripple"));
        assert!(text.contains("--even-order"));
    }
}
