//! ASCII Pi-ladder schematic sized to the component count.
//!
//! ```text
//!   IN ───┬───┤ L1 ├───┬─── OUT
//!         │            │
//!        ===          ===
//!        C1           C2
//!         │            │
//!        GND          GND
//! ```

/// Render the schematic for a ladder with the given element counts.
///
/// Capacitors tap the signal line at each `┬`; an even-order ladder ends in
/// an inductor, so its last tap is dropped.
pub fn pi_topology(capacitors: usize, inductors: usize) -> String {
    let mut main = String::from("  IN ───┬");
    for i in 1..=inductors {
        main.push_str(&format!("───┤ L{i} ├───┬"));
    }
    if capacitors <= inductors && main.ends_with('┬') {
        main.pop();
    }
    main.push_str("─── OUT");

    let main: Vec<char> = main.chars().collect();
    let taps: Vec<usize> = main
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| (c == '┬').then_some(i))
        .collect();

    let row = |labels: &dyn Fn(usize) -> String| -> String {
        let mut chars = vec![' '; main.len()];
        for (n, &pos) in taps.iter().enumerate() {
            let label: Vec<char> = labels(n + 1).chars().collect();
            let start = pos.saturating_sub(label.len() / 2);
            for (j, c) in label.into_iter().enumerate() {
                if let Some(slot) = chars.get_mut(start + j) {
                    *slot = c;
                }
            }
        }
        chars.into_iter().collect::<String>().trim_end().to_string()
    };

    let wire = row(&|_| "│".to_string());
    let lines = [
        main.iter().collect::<String>(),
        wire.clone(),
        row(&|_| "===".to_string()),
        row(&|n| format!("C{n}")),
        wire,
        row(&|_| "GND".to_string()),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_order_layout() {
        let d = pi_topology(2, 1);
        let lines: Vec<&str> = d.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  IN ───┬───┤ L1 ├───┬─── OUT");
        assert_eq!(lines[1], "        │            │");
        assert_eq!(lines[2], "       ===          ===");
        assert_eq!(lines[3], "       C1           C2");
        assert_eq!(lines[5], "       GND          GND");
    }

    #[test]
    fn even_order_ends_in_inductor() {
        let d = pi_topology(2, 2);
        let first = d.lines().next().unwrap();
        assert!(first.ends_with("┤ L2 ├────── OUT"), "{first}");
        assert_eq!(first.matches('┬').count(), 2);
        assert!(d.contains("C2") && !d.contains("C3"));
    }

    #[test]
    fn first_order_is_single_shunt() {
        let d = pi_topology(1, 0);
        assert!(d.starts_with("  IN ───┬─── OUT"));
        assert_eq!(d.matches("GND").count(), 1);
    }

    #[test]
    fn every_capacitor_has_a_tap() {
        for n in 1..=9_usize {
            let caps = n.div_ceil(2);
            let d = pi_topology(caps, n / 2);
            assert_eq!(d.matches("GND").count(), caps, "order {n}");
            assert_eq!(d.lines().next().unwrap().matches('┬').count(), caps);
        }
    }
}
