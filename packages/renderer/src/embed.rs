/// Rewrite a watch/share link into a player URL.
///
/// `youtube.com/watch?v=ID` and `youtu.be/ID` become
/// `https://www.youtube.com/embed/ID`, `vimeo.com/ID` becomes
/// `https://player.vimeo.com/video/ID`. Anything else, including links
/// without a recognizable id, passes through unchanged.
pub fn embed_url(url: &str) -> String {
    if url.contains("youtu.be") {
        if let Some(id) = last_segment(url) {
            return format!("https://www.youtube.com/embed/{}", id);
        }
    } else if url.contains("youtube.com") {
        if let Some(id) = query_param(url, "v") {
            return format!("https://www.youtube.com/embed/{}", id);
        }
    } else if url.contains("vimeo.com") && !url.contains("player.vimeo.com") {
        if let Some(id) = last_segment(url) {
            return format!("https://player.vimeo.com/video/{}", id);
        }
    }
    url.to_string()
}

fn last_segment(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains('.'))
}

fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.split('#').next().unwrap_or(value))
        .filter(|value| !value.is_empty())
}
