/// Identity of a story within the result set.
pub type StoryId = String;

/// One search hit from the remote index.
///
/// Identity is `id`; every other field is display data carried through
/// unchanged from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub comment_count: u32,
    pub points: i64,
}
