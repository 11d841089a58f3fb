/// A captioned photo in the article. Terminals cannot show the image, so
/// the screen prints the caption and where to find it.
#[derive(Debug, Clone, Copy)]
pub struct Figure {
    pub image_url: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Tag {
    pub label: &'static str,
    pub link: &'static str,
}

/// Article body in reading order.
#[derive(Debug, Clone, Copy)]
pub enum Section {
    Paragraph(&'static str),
    Figure(Figure),
}

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub published: &'static str,
    pub updated: &'static str,
    pub link: &'static str,
    pub body: &'static [Section],
    pub reporter: &'static str,
    pub reporter_email: &'static str,
    pub tags: &'static [Tag],
}

pub const FEATURED: Article = Article {
    headline: "고령 보행자 사고 OECD 1위… 노인보호 대안은?",
    subtitle: "전문가들 \"실버존·스마트 횡단보도 확대\" 한목소리",
    published: "2022-06-17 13:57",
    updated: "2022-06-17 16:14",
    link: "https://bravo.etoday.co.kr/view/atc_view/13649",
    body: &[
        Section::Figure(Figure {
            image_url: "https://img.etoday.co.kr/pto_db/2022/06/600/20220617161410_1765632_1199_800.jpg",
            caption: "▲서울시 종로구의 한 도로에서 위험하게 손수레를 끌고있는 노인.(사진작가 이화진)",
        }),
        Section::Paragraph(
            "교통사고분석시스템(TAAS)에 따르면 지난해 우리나라의 보행사상자의 59%가 65세 이상 \
             고령자로 나타났다. 아울러 OECD의 65세 이상 노인 인구 10만 명당 보행 중 사망자수 \
             통계에서도 압도적 1위로, 전체 회원국 평균(2.5명)보다 4배에 가까운(9.7명) 수치를 \
             기록했다.",
        ),
        Section::Paragraph(
            "이에 노인의 무단횡단 등이 문제로 지적되기도 했으나, 행정안전부가 발표한 ❛2017 노인 \
             보행자 교통사고 다발지역 교통사고 특성❜ 통계 등을 보면 안전운전 불이행(68%)이 가장 \
             큰 이유로 꼽혔다. 그밖에 교통사고가 지속 발생하는 장소 역시 시장, 병원 등 노인 \
             유동인구가 많은 곳으로 나타나며, 노인 보행자의 안전을 위한 노력이 촉구되는 시점이다.",
        ),
        Section::Paragraph(
            "그 노력의 일환으로 ❛노인보호구역❜ (실버존, Silver Zone)을 예로 들 수 있다. 노인 \
             보행자 사고가 증가함에 따라 이들의 안전한 통행을 보장하기 위해 2008년부터 도입된 \
             교통약자 보호 제도 인데, 노인들의 통행량이 많은 구역을 선정해 차량 속도 제한 및 \
             일정 시설을 설치하는 형태다. 주로 경로당, 노인복지시설, 공원, 시장 인근을 \
             지정하는데, 사실상 그 존재가 미미하다.",
        ),
        Section::Paragraph(
            "어린이보호구역(스쿨존)과 비교해 살펴보면, 먼저 그 숫자가 턱없이 부족하다(2021년 기준 \
             스쿨존 1만 6700여 곳, 실버존 2600여 곳). 또 두 곳 모두 해당 구역에서는 주정차가 \
             금지되고 차량 운행 속도는 시속 30km로 제한되지만, 실버존의 경우 12대 교통사고 \
             중과실에 포함되지 않아 사고가 났더라도 무조건 형사 처벌 대상이 되지는 \
             않는다(어린이보호구역 안전운전의무 위반의 경우 포함).",
        ),
        Section::Figure(Figure {
            image_url: "https://img.etoday.co.kr/pto_db/2022/06/600/20220616170826_1765230_1200_989.jpg",
            caption: "(OECD stats) OECD회원국 평균 65세 이상 노인인구 10만 명당 보행 중 사망자수",
        }),
        Section::Paragraph(
            "이에 최근 국가인권위원회는 행정안전부장관 및 경창철장에게 노인보호구역 지정, 관리 \
             실태 점검 및 확대, 대책 강화 방안 등을 마련할 것을 권고했다. 이후 도로교통법 \
             개정안에는 자동차 통행속도 제한(30km) 및 무인 교통단속용 장비 설치 등을 통한 \
             노인보호구역 내 안전 강화에 대한 내용이 포함됐다.",
        ),
        Section::Paragraph(
            "고령 보행자는 거동이 불편한 경우가 많아, 일반인에 비해 보행 신호 시간이 부족할 수 \
             있다. 자칫 사고로 이어질 위험성도 적지 않은데, 이러한 점을 해결하기 위한 방안으로 \
             ‘스마트 횡단보도’를 설치, 점차 확대해나갈 전망이다. 한국건설기술연구원이 개발한 \
             ‘스마트 횡단보도’는 횡단보도에 사람이 접근하거나 신호가 끝났는데 아직 머물러 있는 \
             경우, 차량 운전자와 보행자 모두에게 음성 경고 신호를 보낸다.",
        ),
        Section::Figure(Figure {
            image_url: "https://img.etoday.co.kr/pto_db/2022/06/600/20220616170825_1765229_1199_899.jpg",
            caption: "▲노인들이 신호를 무시한 채 횡단보도를 벗어나 보행하고 있다.(이지혜 기자 jyelee@)",
        }),
        Section::Paragraph(
            "그밖에 노인 무단횡단 사고의 경우, 무더위가 기승을 부리는 여름철 더욱 위험성이 높아질 \
             수 있다. 거동이 불편한 상태에서 무더위를 이기지 못하고 무단횡단을 하는 노인이 적지 \
             않다는 것. 이에 최근에는 횡단보도 대기 중 더위를 막아주는 (스마트)그늘막이나 \
             간이의자 등을 설치해 이러한 사고를 방지하고 있다.",
        ),
        Section::Paragraph(
            "도로교통공단 정책연구처 이세원 연구원은 “방호울타리 무단횡단방지펜스 등도 고령자 \
             무단횡단을 물리적으로 방지하는 시설이다”라며 “넓은 대로에 있는 횡단보도의 경우 \
             상대적으로 걸음이 느린 고령 보행자들이 한번 쉬어갈 수 있도록 중앙보행섬이나 \
             횡단대기공간에 그늘막 등을 설치한다. 다만 중앙보행섬의 경우 설치 목적과 다르게 대기 \
             공간 내 안전상의 문제나 무단횡단을 더 유발할 수 있다는 문제점을 지적하는 경우도 \
             있다”고 설명했다.",
        ),
    ],
    reporter: "이지혜 기자",
    reporter_email: "jyelee@etoday.co.kr",
    tags: &[
        Tag {
            label: "#고령보행자",
            link: "https://bravo.etoday.co.kr/section/search_list?varSrchKwd=%EA%B3%A0%EB%A0%B9%EB%B3%B4%ED%96%89%EC%9E%90",
        },
        Tag {
            label: "#무단횡단",
            link: "https://bravo.etoday.co.kr/section/search_list?varSrchKwd=%EB%AC%B4%EB%8B%A8%ED%9A%A1%EB%8B%A8",
        },
        Tag {
            label: "#실버존",
            link: "https://bravo.etoday.co.kr/section/search_list?varSrchKwd=%EC%8B%A4%EB%B2%84%EC%A1%B4",
        },
        Tag {
            label: "#노인보호구역",
            link: "https://bravo.etoday.co.kr/section/search_list?varSrchKwd=%EB%85%B8%EC%9D%B8%EB%B3%B4%ED%98%B8%EA%B5%AC%EC%97%B0",
        },
    ],
};

impl Article {
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        let body: &'static [Section] = self.body;
        body.iter().filter_map(|block| match block {
            Section::Paragraph(text) => Some(*text),
            Section::Figure(_) => None,
        })
    }

    pub fn figures(&self) -> impl Iterator<Item = &'static Figure> {
        let body: &'static [Section] = self.body;
        body.iter().filter_map(|block| match block {
            Section::Figure(figure) => Some(figure),
            Section::Paragraph(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_article_is_complete() {
        assert_eq!(FEATURED.paragraphs().count(), 8);
        assert_eq!(FEATURED.figures().count(), 3);
        assert_eq!(FEATURED.tags.len(), 4);
        assert!(FEATURED.link.starts_with("https://bravo.etoday.co.kr/"));
        // Line continuations must not leave doubled spaces behind.
        assert!(FEATURED.paragraphs().all(|p| !p.contains("  ")));
    }
}
