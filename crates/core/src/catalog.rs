//! Compiled-in stock picks for each element.
//!
//! The table is static and read-only. Index 0 of every entry is the top pick.

use crate::domain::{Element, StockPick};

// Indexed by `Element::index`.
static CATALOG: [[StockPick; 3]; 5] = [
    [
        StockPick {
            name: "F&F",
            ticker: "383220",
            price_label: "68,200원",
            change_label: "+12.5%",
            rationale: "목(木)의 기운인 성장과 의복 기운이 강하며, 현재 패션 섹터의 상승세와 맞물립니다.",
        },
        StockPick {
            name: "무림P&P",
            ticker: "009580",
            price_label: "3,120원",
            change_label: "+5.2%",
            rationale: "자연과 나무의 에너지를 담고 있어 안정적인 기운을 보강해줍니다.",
        },
        StockPick {
            name: "한샘",
            ticker: "009240",
            price_label: "45,600원",
            change_label: "+8.1%",
            rationale: "가구와 인테리어 기운이 당신의 사주 평형을 맞춰줍니다.",
        },
    ],
    [
        StockPick {
            name: "에코프로비엠",
            ticker: "247540",
            price_label: "215,000원",
            change_label: "+24.1%",
            rationale: "화(火)의 강력한 에너지와 2차전지의 열기가 당신의 운세와 공명합니다.",
        },
        StockPick {
            name: "SK이노베이션",
            ticker: "096770",
            price_label: "124,500원",
            change_label: "+15.3%",
            rationale: "에너지와 화학의 기운이 당신의 추진력을 극대화해줍니다.",
        },
        StockPick {
            name: "LG에너지솔루션",
            ticker: "373220",
            price_label: "380,000원",
            change_label: "+10.8%",
            rationale: "빛과 전기의 에너지가 부족한 화 기운을 보충합니다.",
        },
    ],
    [
        StockPick {
            name: "삼성물산",
            ticker: "028260",
            price_label: "148,600원",
            change_label: "+6.4%",
            rationale: "토(土)의 견고함과 건설/상사의 안정성이 당신의 자산을 지켜줍니다.",
        },
        StockPick {
            name: "현대건설",
            ticker: "000720",
            price_label: "32,100원",
            change_label: "+3.2%",
            rationale: "땅의 기운이 강한 건설 섹터가 당신의 근본 기운을 강화합니다.",
        },
        StockPick {
            name: "DL이앤씨",
            ticker: "375500",
            price_label: "35,400원",
            change_label: "+5.7%",
            rationale: "대지의 기운을 바탕으로 장기적인 성장을 도모할 수 있습니다.",
        },
    ],
    [
        StockPick {
            name: "포스코홀딩스",
            ticker: "005490",
            price_label: "420,000원",
            change_label: "+18.2%",
            rationale: "금(金)의 기운인 철강과 단단한 결실이 당신의 재물운을 상승시킵니다.",
        },
        StockPick {
            name: "현대차",
            ticker: "005380",
            price_label: "245,000원",
            change_label: "+14.5%",
            rationale: "금속과 기계의 에너지가 당신의 사주 흐름에 활력을 줍니다.",
        },
        StockPick {
            name: "기아",
            ticker: "000270",
            price_label: "115,000원",
            change_label: "+22.1%",
            rationale: "단단한 금의 기운이 비즈니스의 성공 가능성을 높여줍니다.",
        },
    ],
    [
        StockPick {
            name: "HMM",
            ticker: "011200",
            price_label: "18,500원",
            change_label: "+9.4%",
            rationale: "수(水)의 기운인 흐름과 물류가 당신의 변화무쌍한 운세와 잘 어우러집니다.",
        },
        StockPick {
            name: "CJ제일제당",
            ticker: "097950",
            price_label: "298,000원",
            change_label: "+4.2%",
            rationale: "식음료와 유통의 기운이 부족한 수 기운을 유연하게 채워줍니다.",
        },
        StockPick {
            name: "제주항공",
            ticker: "089590",
            price_label: "10,200원",
            change_label: "+7.1%",
            rationale: "역마와 이동의 에너지가 당신의 활동 범위를 넓혀줄 것입니다.",
        },
    ],
];

pub fn recommendations_for(element: Element) -> &'static [StockPick; 3] {
    &CATALOG[element.index()]
}

/// Looks up picks for a label coming from outside the process (URL path,
/// CLI flag). Unknown labels resolve to `Element::DEFAULT` instead of failing.
pub fn recommendations_for_label(label: &str) -> (Element, &'static [StockPick; 3]) {
    let element = Element::from_label(label).unwrap_or_else(|| {
        tracing::warn!(label, fallback = %Element::DEFAULT, "unknown element label; using default");
        Element::DEFAULT
    });
    (element, recommendations_for(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_element_has_three_complete_picks() {
        for element in Element::ALL {
            let picks = recommendations_for(element);
            assert_eq!(picks.len(), 3);
            for pick in picks {
                assert!(!pick.name.trim().is_empty(), "{element}: empty name");
                assert!(!pick.rationale.trim().is_empty(), "{element}: empty rationale");
                assert_eq!(pick.ticker.len(), 6, "{element}: {}", pick.ticker);
                assert!(pick.ticker.chars().all(|c| c.is_ascii_digit()));
                assert!(pick.price_label.ends_with('원'));
                assert!(pick.change_label.starts_with('+') || pick.change_label.starts_with('-'));
            }
        }
    }

    #[test]
    fn tickers_are_unique_within_an_element() {
        for element in Element::ALL {
            let tickers: BTreeSet<_> = recommendations_for(element).iter().map(|p| p.ticker).collect();
            assert_eq!(tickers.len(), 3, "{element}");
        }
    }

    #[test]
    fn top_pick_rationale_names_its_element() {
        for element in Element::ALL {
            let top = &recommendations_for(element)[0];
            assert!(top.rationale.contains(element.label()), "{element}: {}", top.rationale);
        }
        assert_eq!(recommendations_for(Element::Wood)[0].name, "F&F");
    }

    #[test]
    fn top_pick_is_stable() {
        let first = recommendations_for(Element::Metal)[0];
        for _ in 0..10 {
            assert_eq!(recommendations_for(Element::Metal)[0], first);
        }
    }

    #[test]
    fn known_label_resolves_to_its_element() {
        let (element, picks) = recommendations_for_label("水");
        assert_eq!(element, Element::Water);
        assert_eq!(picks, recommendations_for(Element::Water));
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        for label in ["", "風", "plasma", "木木"] {
            let (element, picks) = recommendations_for_label(label);
            assert_eq!(element, Element::DEFAULT);
            assert_eq!(picks, recommendations_for(Element::DEFAULT));
        }
    }
}
