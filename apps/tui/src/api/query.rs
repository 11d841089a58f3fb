use crate::domain::YearSelection;

pub const DEFAULT_ENDPOINT: &str =
    "https://apis.data.go.kr/B552061/frequentzoneOldman/getRestFrequentzoneOldman";

/// Administrative area codes understood by the accident hotspot service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub si_do: u16,
    pub gu_gun: u16,
}

/// Incheon Metropolitan City, Bupyeong-gu.
pub const BUPYEONG_GU: Region = Region {
    si_do: 28,
    gu_gun: 237,
};

pub const RESPONSE_TYPE: &str = "json";
pub const PAGE_SIZE: u32 = 10;
pub const FIRST_PAGE: u32 = 1;

/// Everything that goes into one hotspot request. Only `year` varies at
/// runtime.
#[derive(Debug, Clone, Copy)]
pub struct AccidentQuery<'a> {
    pub service_key: &'a str,
    pub year: YearSelection,
    pub region: Region,
    pub page_size: u32,
    pub page_no: u32,
}

impl<'a> AccidentQuery<'a> {
    pub const fn new(service_key: &'a str, year: YearSelection) -> Self {
        Self {
            service_key,
            year,
            region: BUPYEONG_GU,
            page_size: PAGE_SIZE,
            page_no: FIRST_PAGE,
        }
    }

    /// Builds the request URL. The portal issues service keys that are
    /// already percent-encoded, so the key is appended as-is.
    pub fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };

        format!(
            "{endpoint}{separator}serviceKey={key}&searchYearCd={year}&siDo={si_do}&guGun={gu_gun}&type={kind}&numOfRows={rows}&pageNo={page}",
            key = self.service_key,
            year = self.year.value(),
            si_do = self.region.si_do,
            gu_gun = self.region.gu_gun,
            kind = RESPONSE_TYPE,
            rows = self.page_size,
            page = self.page_no,
        )
    }
}
