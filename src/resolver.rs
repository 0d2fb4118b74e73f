use crate::types::{PrizeMatch, PrizeTierSet, TicketNumber};

/// Matches a ticket against one draw. Higher tiers are checked first, so a
/// grand prize winner is never reported as a suffix match.
pub fn determine_prize(ticket: &TicketNumber, tiers: &PrizeTierSet) -> PrizeMatch {
    let number = ticket.as_str();

    let exact_tiers: [(&[String], PrizeMatch); 5] = [
        (tiers.nearby_first.as_slice(), PrizeMatch::NearbyFirst),
        (tiers.second.as_slice(), PrizeMatch::SecondPrize),
        (tiers.third.as_slice(), PrizeMatch::ThirdPrize),
        (tiers.fourth.as_slice(), PrizeMatch::FourthPrize),
        (tiers.fifth.as_slice(), PrizeMatch::FifthPrize),
    ];

    if same(tiers.first.as_deref(), number) {
        return PrizeMatch::FirstPrize;
    }
    if let Some((_, prize)) = exact_tiers
        .iter()
        .find(|(numbers, _)| contains(numbers, number))
    {
        return *prize;
    }
    if contains(&tiers.front_three, ticket.front_three()) {
        return PrizeMatch::FrontThree;
    }
    if contains(&tiers.back_three, ticket.back_three()) {
        return PrizeMatch::BackThree;
    }
    if same(tiers.last_two.as_deref(), ticket.last_two()) {
        return PrizeMatch::LastTwo;
    }
    PrizeMatch::NoMatch
}

fn same(drawn: Option<&str>, candidate: &str) -> bool {
    match drawn.map(str::trim) {
        Some(drawn) if !drawn.is_empty() => drawn == candidate.trim(),
        _ => false,
    }
}

fn contains(drawn: &[String], candidate: &str) -> bool {
    drawn.iter().any(|number| same(Some(number.as_str()), candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(number: &str) -> TicketNumber {
        TicketNumber::parse(number).unwrap()
    }

    fn strings(numbers: &[&str]) -> Vec<String> {
        numbers.iter().map(|n| n.to_string()).collect()
    }

    fn full_draw() -> PrizeTierSet {
        PrizeTierSet {
            date: "2024-10-16".into(),
            first: Some("266227".into()),
            nearby_first: strings(&["266226", "266228"]),
            second: strings(&["040588"]),
            third: strings(&["118382"]),
            fourth: strings(&["300001"]),
            fifth: strings(&["500005"]),
            front_three: strings(&["209", "837"]),
            back_three: strings(&["112", "219"]),
            last_two: Some("56".into()),
        }
    }

    #[test]
    fn first_prize_beats_back_three() {
        let tiers = PrizeTierSet {
            first: Some("123456".into()),
            back_three: strings(&["456"]),
            ..Default::default()
        };
        assert_eq!(determine_prize(&ticket("123456"), &tiers), PrizeMatch::FirstPrize);
    }

    #[test]
    fn last_two_only() {
        let tiers = PrizeTierSet {
            first: Some("111111".into()),
            last_two: Some("54".into()),
            ..Default::default()
        };
        assert_eq!(determine_prize(&ticket("987654"), &tiers), PrizeMatch::LastTwo);
    }

    #[test]
    fn each_tier_in_precedence_order() {
        let tiers = full_draw();
        let cases = [
            ("266227", PrizeMatch::FirstPrize),
            ("266228", PrizeMatch::NearbyFirst),
            ("040588", PrizeMatch::SecondPrize),
            ("118382", PrizeMatch::ThirdPrize),
            ("300001", PrizeMatch::FourthPrize),
            ("500005", PrizeMatch::FifthPrize),
            ("837000", PrizeMatch::FrontThree),
            ("000219", PrizeMatch::BackThree),
            ("000056", PrizeMatch::LastTwo),
            ("999999", PrizeMatch::NoMatch),
        ];
        for (number, expected) in cases {
            assert_eq!(determine_prize(&ticket(number), &tiers), expected, "ticket {number}");
        }
    }

    #[test]
    fn front_three_beats_back_three_and_last_two() {
        let tiers = full_draw();
        // front 209, back 112, last two 56 are all drawn
        assert_eq!(determine_prize(&ticket("209112"), &tiers), PrizeMatch::FrontThree);
        assert_eq!(determine_prize(&ticket("000156"), &tiers), PrizeMatch::LastTwo);
    }

    #[test]
    fn drawn_numbers_are_trimmed() {
        let tiers = PrizeTierSet {
            second: strings(&[" 040588\t"]),
            last_two: Some(" 56 ".into()),
            ..Default::default()
        };
        assert_eq!(determine_prize(&ticket("040588"), &tiers), PrizeMatch::SecondPrize);
        assert_eq!(determine_prize(&ticket("123456"), &tiers), PrizeMatch::LastTwo);
    }

    #[test]
    fn empty_draw_matches_nothing() {
        let tiers = PrizeTierSet {
            first: Some("   ".into()),
            front_three: strings(&[""]),
            last_two: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(determine_prize(&ticket("000000"), &tiers), PrizeMatch::NoMatch);
        assert_eq!(
            determine_prize(&ticket("000000"), &PrizeTierSet::default()),
            PrizeMatch::NoMatch
        );
    }
}
