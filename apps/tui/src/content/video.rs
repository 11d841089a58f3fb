#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEntry {
    pub heading: &'static str,
    /// Full title as published on the channel.
    pub title: &'static str,
    pub embed_url: &'static str,
}

impl VideoEntry {
    /// Watch-page link for the embedded id, for opening in a browser.
    pub fn watch_url(&self) -> String {
        let id = self
            .embed_url
            .rsplit('/')
            .next()
            .unwrap_or(self.embed_url);
        format!("https://www.youtube.com/watch?v={id}")
    }
}

pub const VIDEOS: [VideoEntry; 2] = [
    VideoEntry {
        heading: "고령자를 위해 꼭 필요한 교통안전교육(※실제 사고영상, 시청주의)",
        title: "고령자를 위해 꼭 필요한 교통안전교육(※실제 사고영상, 시청주의)",
        embed_url: "https://www.youtube.com/embed/U2Epo161gEc",
    },
    VideoEntry {
        heading: "늘어나는 고령자 보행 교통사고, 그 이유는?",
        title: "늘어나는 고령자 보행 교통사고, 그 이유는? | 행복한 아침 659 회",
        embed_url: "https://www.youtube.com/embed/QKC99M45JJs",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_uses_embed_id() {
        assert_eq!(
            VIDEOS[1].watch_url(),
            "https://www.youtube.com/watch?v=QKC99M45JJs"
        );
    }
}
