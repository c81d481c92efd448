use crate::catalog::recommendations_for;
use crate::domain::{BirthProfile, Element, ElementTheme, StockPick};
use crate::saju::classify;
use serde::Serialize;

pub const SHARE_TITLE: &str = "내 사주에 맞는 반려주식 찾기";

/// The result of classifying a birth profile.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub profile: BirthProfile,
    pub element: Element,
    pub theme: &'static ElementTheme,
    pub picks: &'static [StockPick; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl Reading {
    pub fn for_profile(profile: BirthProfile) -> Self {
        let element = classify(profile.birth_date);
        tracing::debug!(birth_date = %profile.birth_date, %element, "classified birth date");

        Self {
            profile,
            element,
            theme: element.theme(),
            picks: recommendations_for(element),
        }
    }

    pub fn top_pick(&self) -> &'static StockPick {
        &self.picks[0]
    }

    pub fn share_text(&self) -> String {
        format!(
            "나의 오행 기운은 '{}'! 추천 주식은 {}입니다.",
            self.element.label(),
            self.top_pick().name
        )
    }

    /// The fixed-template "상세 분석" paragraph shown under the picks.
    pub fn summary(&self) -> String {
        format!(
            "분석 결과, 당신은 {}의 기운을 가지고 태어났습니다. \
             이는 어떤 상황에서도 중심을 잃지 않는 강한 정신력을 의미합니다. \
             {}와 같이 흐름을 주도하는 대형주들이 당신의 기운을 보완하며 최상의 시너지를 낼 것입니다.",
            self.theme.title,
            self.top_pick().name
        )
    }

    pub fn share_payload(&self, url: Option<&str>) -> SharePayload {
        SharePayload {
            title: SHARE_TITLE.to_string(),
            text: self.share_text(),
            url: url.map(str::to_string),
        }
    }
}
