use crate::session::{Card, ResultsSnapshot};

/// Tag buttons offered on the recommend form, in display order.
pub const TAGS: &[&str] = &[
    "Student",
    "Unemployed",
    "Youth",
    "Women",
    "Entrepreneur",
    "Farmer",
    "Pregnant Women",
    "Senior Citizen",
];

const GENDERS: &[&str] = &["Male", "Female", "Other"];
const EDUCATION: &[&str] = &[
    "Class 8",
    "Class 10",
    "Class 12",
    "Graduate",
    "Postgraduate",
    "PhD",
];
const AREAS: &[&str] = &["Urban", "Rural"];
const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Ladakh",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

pub fn render_home() -> String {
    layout("Schemely", HOME_BODY)
}

pub fn render_login() -> String {
    layout("Login - Schemely", LOGIN_BODY)
}

pub fn render_signup() -> String {
    layout("Sign Up - Schemely", SIGNUP_BODY)
}

pub fn render_recommend(snapshot: &ResultsSnapshot) -> String {
    let tags: String = TAGS
        .iter()
        .map(|tag| {
            format!(
                r#"<button type="button" class="tag-btn">{}</button>"#,
                html_escape(tag)
            )
        })
        .collect();

    let body = RECOMMEND_BODY
        .replace("{{GENDERS}}", &options(GENDERS))
        .replace("{{EDUCATION}}", &options(EDUCATION))
        .replace("{{AREAS}}", &options(AREAS))
        .replace("{{STATES}}", &options(STATES))
        .replace("{{TAGS}}", &tags)
        .replace("{{SECTION_DISPLAY}}", display(snapshot.section_visible, "block"))
        .replace("{{COUNT_TEXT}}", &html_escape(&snapshot.count_text))
        .replace("{{PDF_DISPLAY}}", display(snapshot.export_visible, "inline-block"))
        .replace(
            "{{EXPORT_ERROR}}",
            &html_escape(snapshot.export_error.as_deref().unwrap_or("")),
        )
        .replace("{{GRID}}", &snapshot.grid_html);

    layout("Find Schemes - Schemely", &body)
}

/// Inner HTML of the cards grid: either one card per scheme or a single message.
pub fn render_grid(cards: &[Card], message: Option<&str>, errored: bool) -> String {
    if let Some(message) = message {
        let class = if errored { "scheme-card error-card" } else { "empty-note" };
        return format!(r#"<p class="{class}">{}</p>"#, html_escape(message));
    }
    cards.iter().map(render_card).collect()
}

pub fn render_card(card: &Card) -> String {
    CARD_HTML
        .replace("{{NUM}}", &card.position.to_string())
        .replace("{{STATE}}", &html_escape(&card.state))
        .replace("{{TITLE}}", &html_escape(&card.title))
        .replace("{{SUMMARY}}", &html_escape(&card.summary))
        .replace("{{LINK}}", &html_escape(&card.link))
}

fn layout(title: &str, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", &html_escape(title))
        .replace("{{BODY}}", body)
}

fn options(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| {
            let escaped = html_escape(value);
            format!(r#"<option value="{escaped}">{escaped}</option>"#)
        })
        .collect()
}

fn display(visible: bool, shown: &'static str) -> &'static str {
    if visible { shown } else { "none" }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const CARD_HTML: &str = r#"<div class="scheme-card">
  <div class="scheme-top">
    <span class="scheme-num">{{NUM}}</span>
    <span class="scheme-state">{{STATE}}</span>
  </div>
  <h3 class="scheme-title">{{TITLE}}</h3>
  <p class="scheme-summary">{{SUMMARY}}</p>
  <div class="scheme-cta">
    <a class="apply-btn" href="{{LINK}}" target="_blank" rel="noopener">Apply Now</a>
  </div>
</div>
"#;

const HOME_BODY: &str = r#"<section class="hero">
  <h1>Find the government schemes you qualify for</h1>
  <p class="subtitle">Tell us a little about yourself and Schemely lists the welfare programs that fit.</p>
  <div class="hero-actions">
    <a class="btn" href="/recommend">Get recommendations</a>
    <a class="btn btn-ghost" href="/signup">Create an account</a>
  </div>
</section>
"#;

const LOGIN_BODY: &str = r#"<section class="auth">
  <h1>Welcome back</h1>
  <form class="login-form">
    <input type="email" placeholder="Email" autocomplete="email" />
    <input type="password" placeholder="Password" autocomplete="current-password" />
    <button type="submit" class="btn">Login</button>
  </form>
  <p>New here? <a href="/signup">Create an account</a></p>
</section>
"#;

const SIGNUP_BODY: &str = r#"<section class="auth">
  <h1>Create your account</h1>
  <form class="signup-form">
    <input type="text" placeholder="Name" autocomplete="name" />
    <input type="email" placeholder="Email" autocomplete="email" />
    <input type="password" placeholder="Password" autocomplete="new-password" />
    <button type="submit" class="btn">Sign Up</button>
  </form>
  <p>Already registered? <a href="/login">Login</a></p>
</section>
"#;

const RECOMMEND_BODY: &str = r#"<section class="recommend">
  <h1>Tell us about yourself</h1>
  <form class="recommend-form">
    <label>Age <input type="number" min="0" placeholder="Age" /></label>
    <label>Gender <select>{{GENDERS}}</select></label>
    <label>Education <select>{{EDUCATION}}</select></label>
    <label>Area <select>{{AREAS}}</select></label>
    <label>State <select>{{STATES}}</select></label>
    <div class="tags">{{TAGS}}</div>
    <button type="submit" class="btn">Find Schemes</button>
  </form>
</section>
<section id="results-section" style="display: {{SECTION_DISPLAY}}">
  <div class="results-head">
    <h2 id="results-count">{{COUNT_TEXT}}</h2>
    <button id="download-pdf" class="btn" type="button" style="display: {{PDF_DISPLAY}}">Download PDF</button>
  </div>
  <p id="export-error" class="status error">{{EXPORT_ERROR}}</p>
  <div id="cards-grid" class="cards-grid">{{GRID}}</div>
</section>
"#;

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f4f7fb;
      --ink: #1f2a37;
      --accent: #2f6fed;
      --muted: #6b7280;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
    }

    .navbar {
      position: sticky;
      top: 0;
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 14px 28px;
      background: var(--card);
      transition: box-shadow 200ms ease;
      z-index: 10;
    }

    .navbar .logo {
      font-weight: 700;
      font-size: 1.3rem;
      color: var(--accent);
      text-decoration: none;
    }

    .navbar ul {
      list-style: none;
      display: flex;
      gap: 20px;
      margin: 0;
      padding: 0;
    }

    .navbar a {
      color: var(--ink);
      text-decoration: none;
    }

    #menu-icon {
      display: none;
      font-size: 1.6rem;
      cursor: pointer;
    }

    @media (max-width: 720px) {
      #menu-icon {
        display: block;
      }

      .navbar ul {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        background: var(--card);
        padding: 16px 28px;
      }

      .navbar ul.active {
        display: flex;
      }
    }

    main {
      width: min(1000px, 100%);
      margin: 0 auto;
      padding: 32px 18px 48px;
      display: grid;
      gap: 28px;
    }

    form {
      display: grid;
      gap: 14px;
      max-width: 520px;
    }

    input,
    select {
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid #d1d5db;
      font-size: 1rem;
      width: 100%;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      display: inline-block;
    }

    .btn-ghost {
      background: transparent;
      color: var(--accent);
      border: 1px solid var(--accent);
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tag-btn {
      border: 1px solid var(--accent);
      background: transparent;
      color: var(--accent);
      border-radius: 999px;
      padding: 6px 14px;
      cursor: pointer;
    }

    .tag-btn.active {
      background: var(--accent);
      color: white;
    }

    .results-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .cards-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
      gap: 16px;
    }

    .scheme-card {
      background: var(--card);
      border-radius: 16px;
      padding: 18px;
      box-shadow: 0 10px 24px rgba(31, 42, 55, 0.08);
      display: grid;
      gap: 8px;
    }

    .scheme-top {
      display: flex;
      justify-content: space-between;
      color: var(--muted);
    }

    .scheme-num {
      font-weight: 700;
      color: var(--accent);
    }

    .error-card,
    .status.error {
      color: #b42318;
    }

    .empty-note {
      color: var(--muted);
    }
  </style>
</head>
<body>
  <nav class="navbar">
    <a class="logo" href="/">Schemely</a>
    <span id="menu-icon">&#9776;</span>
    <ul>
      <li><a href="/">Home</a></li>
      <li><a href="/recommend">Find Schemes</a></li>
      <li><a href="/login">Login</a></li>
      <li><a href="/signup">Sign Up</a></li>
    </ul>
  </nav>
  <main>
{{BODY}}
  </main>

  <script>
    window.addEventListener('scroll', () => {
      const nav = document.querySelector('.navbar');
      nav.style.boxShadow = window.scrollY > 50 ? '0 4px 8px rgba(0,0,0,0.2)' : 'none';
    });

    const menuIcon = document.getElementById('menu-icon');
    const navLinks = document.querySelector('.navbar ul');
    if (menuIcon) {
      menuIcon.addEventListener('click', () => navLinks.classList.toggle('active'));
    }

    document.querySelectorAll('.tag-btn').forEach((btn) => {
      btn.addEventListener('click', () => btn.classList.toggle('active'));
    });

    const postJson = (url, body) =>
      fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const authFlow = async (url, body, failureText) => {
      try {
        const res = await postJson(url, body);
        const outcome = await res.json();
        alert(outcome.msg);
        if (outcome.ok && outcome.redirect) {
          window.location.href = outcome.redirect;
        }
      } catch (err) {
        alert(failureText);
      }
    };

    const loginForm = document.querySelector('.login-form');
    if (loginForm) {
      loginForm.addEventListener('submit', (event) => {
        event.preventDefault();
        authFlow('/api/login', {
          email: loginForm.querySelector("input[type='email']").value,
          password: loginForm.querySelector("input[type='password']").value
        }, 'Login failed! Server Error.');
      });
    }

    const signupForm = document.querySelector('.signup-form');
    if (signupForm) {
      signupForm.addEventListener('submit', (event) => {
        event.preventDefault();
        const inputs = signupForm.querySelectorAll('input');
        authFlow('/api/signup', {
          name: inputs[0].value,
          email: inputs[1].value,
          password: inputs[2].value
        }, 'Account Not Created! Server Error.');
      });
    }

    const resultsSection = document.getElementById('results-section');
    const resultsCount = document.getElementById('results-count');
    const cardsGrid = document.getElementById('cards-grid');
    const pdfBtn = document.getElementById('download-pdf');
    const exportError = document.getElementById('export-error');

    const applySnapshot = (snapshot) => {
      resultsSection.style.display = snapshot.section_visible ? 'block' : 'none';
      resultsCount.innerText = snapshot.count_text;
      cardsGrid.innerHTML = snapshot.grid_html;
      pdfBtn.style.display = snapshot.export_visible ? 'inline-block' : 'none';
      exportError.innerText = snapshot.export_error || '';
      if (snapshot.scroll_into_view) {
        resultsSection.scrollIntoView({ behavior: 'smooth' });
      }
    };

    const recommendForm = document.querySelector('.recommend-form');
    if (recommendForm) {
      recommendForm.addEventListener('submit', async (event) => {
        event.preventDefault();
        const selects = recommendForm.querySelectorAll('select');
        const form = {
          age: recommendForm.querySelector('input[type="number"]').value,
          gender: selects[0].value,
          education: selects[1].value,
          area: selects[2].value,
          state: selects[3].value,
          tags: Array.from(document.querySelectorAll('.tag-btn.active')).map((b) => b.innerText)
        };

        resultsSection.style.display = 'block';
        resultsCount.innerText = 'Finding schemes...';
        cardsGrid.innerHTML = '';

        try {
          const res = await postJson('/api/recommend', form);
          applySnapshot(await res.json());
        } catch (err) {
          resultsCount.innerText = 'Error fetching schemes.';
          cardsGrid.innerHTML = '<p class="scheme-card error-card">Server error. Try again.</p>';
        }
      });
    }

    if (pdfBtn) {
      pdfBtn.addEventListener('click', async () => {
        exportError.innerText = '';
        try {
          const res = await fetch('/api/download-pdf', { method: 'POST' });
          if (!res.ok) {
            const body = await res.json();
            if (res.status === 409) {
              alert(body.message);
            } else {
              exportError.innerText = body.message;
            }
            return;
          }
          const blob = await res.blob();
          const url = window.URL.createObjectURL(blob);
          const a = document.createElement('a');
          a.href = url;
          a.download = 'schemes.pdf';
          a.click();
          window.URL.revokeObjectURL(url);
        } catch (err) {
          exportError.innerText = 'Error generating PDF.';
        }
      });
    }
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResultSet, Scheme};
    use crate::session::ResultsView;

    fn card(position: usize, title: &str) -> Card {
        Card {
            position,
            state: "Delhi".to_string(),
            title: title.to_string(),
            summary: "summary".to_string(),
            link: "http://x".to_string(),
        }
    }

    #[test]
    fn grid_renders_one_card_per_scheme_in_order() {
        let html = render_grid(&[card(1, "A"), card(2, "B")], None, false);
        assert_eq!(html.matches(r#"class="scheme-card""#).count(), 2);
        let first = html.find(r#"<span class="scheme-num">1</span>"#).unwrap();
        let second = html.find(r#"<span class="scheme-num">2</span>"#).unwrap();
        assert!(first < second);
        assert!(html.contains(r#"href="http://x" target="_blank""#));
        assert!(html.contains("Apply Now"));
    }

    #[test]
    fn grid_message_replaces_cards() {
        let html = render_grid(&[], Some("No relevant schemes found."), false);
        assert_eq!(html, r#"<p class="empty-note">No relevant schemes found.</p>"#);

        let html = render_grid(&[], Some("Server error. Try again."), true);
        assert!(html.contains("error-card"));
    }

    #[test]
    fn card_text_is_escaped() {
        let mut hostile = card(1, "<script>alert(1)</script>");
        hostile.link = "javascript:\"x\"".to_string();
        let html = render_card(&hostile);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("javascript:&quot;x&quot;"));
    }

    #[test]
    fn recommend_page_reflects_current_results() {
        let mut view = ResultsView::new();
        let html = render_recommend(&view.snapshot());
        assert!(html.contains(r#"id="results-section" style="display: none""#));
        assert!(html.contains(r#"id="download-pdf" class="btn" type="button" style="display: none""#));
        for tag in TAGS {
            assert!(html.contains(&format!(r#"<button type="button" class="tag-btn">{tag}</button>"#)));
        }

        let ticket = view.begin_submission();
        view.apply_results(
            ticket,
            ResultSet {
                count: 1,
                results: vec![Scheme {
                    state: "Goa".to_string(),
                    scheme_name: "Coastal Aid".to_string(),
                    summary: "help".to_string(),
                    link: "https://goa.gov.in".to_string(),
                    extra: Default::default(),
                }],
            },
        );
        let html = render_recommend(&view.snapshot());
        assert!(html.contains("Found 1 Schemes"));
        assert!(html.contains("Coastal Aid"));
        assert!(html.contains(r#"style="display: inline-block""#));
    }

    #[test]
    fn auth_pages_carry_their_forms() {
        let login = render_login();
        assert!(login.contains(r#"<form class="login-form">"#));
        assert!(login.contains("'Login failed! Server Error.'"));
        assert!(login.contains("'Account Not Created! Server Error.'"));
        assert!(render_signup().contains(r#"<form class="signup-form">"#));
        assert!(render_home().contains(r#"href="/recommend""#));
    }
}
