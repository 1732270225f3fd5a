use dioxus::prelude::*;

pub const URL_PLACEHOLDER: &str = "misalnya https://twitter.com/jack/status/1082159636994121729";

/// What the single page shows after (or before) a submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub url: String,
    pub summary: Option<String>,
    pub thread: Option<String>,
    /// Neutral hint, e.g. when the form was sent without a URL.
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[allow(non_snake_case)]
#[component]
fn SummaryPage(view: PageView) -> Element {
    let url = view.url.clone();
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "Ringkas Thread Twitter" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            main { class: "max-w-2xl mx-auto px-4 py-10",
                h1 { class: "text-3xl font-bold mb-4", "📝 Ringkas Thread Twitter" }
                p { class: "text-gray-700 mb-3",
                    "Aplikasi web ini membantu merangkum thread Twitter dengan mengekstrak konten thread dan menghasilkan ringkasan yang singkat dan dalam kalimat yang mudah dipahami. Dalam pengembangannya, aplikasi ini memanfaatkan teknologi Large Language Model (LLM) yang mampu memahami konteks bahasa manusia dan menghasilkan teks yang lebih natural."
                }
                p { class: "text-gray-700 mb-6",
                    "Dengan aplikasi ini, kamu bisa dengan mudah membaca thread Twitter tanpa harus membaca satu persatu tweetnya. Untuk menggunakan aplikasi ini, masukkan URL thread Twitter pada kotak input di bawah ini dan klik tombol \"Ringkas\". Aplikasi akan menampilkan ringkasan dan konten thread asli di bawahnya."
                }
                form { method: "POST", action: "/", class: "mb-8",
                    label { r#for: "url", class: "block text-sm text-gray-600 mb-1",
                        "Masukkan URL Thread Twitter"
                    }
                    input {
                        r#type: "text", name: "url", id: "url", value: "{url}",
                        placeholder: URL_PLACEHOLDER,
                        class: "w-full px-3 py-2.5 border border-gray-300 rounded text-base mb-3",
                    }
                    button {
                        r#type: "submit",
                        class: "px-5 py-2.5 bg-blue-600 text-white rounded text-sm font-medium cursor-pointer hover:bg-blue-800",
                        "Ringkas"
                    }
                }
                if let Some(err) = &view.error {
                    div { class: "bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mb-6",
                        "{err}"
                    }
                }
                if let Some(notice) = &view.notice {
                    p { class: "text-gray-600 mb-6", "{notice}" }
                }
                if let Some(summary) = &view.summary {
                    section { class: "mb-8",
                        h2 { class: "text-xl font-semibold mb-2",
                            "Ringkasan Dari Thread Twitter yang Kamu Input:"
                        }
                        p { class: "whitespace-pre-wrap leading-relaxed", "{summary}" }
                    }
                }
                if let Some(thread) = &view.thread {
                    section {
                        h2 { class: "text-xl font-semibold mb-2", "Konten Dari Thread Asli:" }
                        p { class: "whitespace-pre-wrap leading-relaxed text-gray-700", "{thread}" }
                    }
                }
            }
        }
    }
}

/// Server-render the page into a full `lang="id"` document.
pub fn render_summary_page(view: PageView) -> String {
    let mut dom = VirtualDom::new_with_props(SummaryPage, SummaryPageProps { view });
    dom.rebuild_in_place();
    format!("<!DOCTYPE html><html lang=\"id\">{}</html>", dioxus::ssr::render(&dom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_shows_form_only() {
        let html = render_summary_page(PageView::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Ringkas Thread Twitter"));
        assert!(html.contains("1082159636994121729"));
        assert!(!html.contains("Konten Dari Thread Asli:"));
        assert!(!html.contains("Ringkasan Dari Thread Twitter"));
    }

    #[test]
    fn result_page_shows_summary_and_thread() {
        let html = render_summary_page(PageView {
            url: "https://twitter.com/jack/status/1".into(),
            summary: Some("Ringkasan santai".into()),
            thread: Some("isi thread".into()),
            ..Default::default()
        });
        assert!(html.contains("Ringkasan Dari Thread Twitter yang Kamu Input:"));
        assert!(html.contains("Ringkasan santai"));
        assert!(html.contains("Konten Dari Thread Asli:"));
        assert!(html.contains("isi thread"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render_summary_page(PageView {
            summary: Some("<script>alert(1)</script>".into()),
            ..Default::default()
        });
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
