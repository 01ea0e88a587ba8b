//! CSS Enhancer — the fixed light sky-blue / green base theme.

/// Hand-authored base stylesheet. Model CSS is appended after it, so model
/// rules win through the cascade.
pub const BASE_CSS: &str = r#"@import url('https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&display=swap');

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Poppins', sans-serif;
    background: linear-gradient(135deg, #e0f2fe, #d1fae5);
    color: #334155;
}

/* CONTAINER */
.container {
    max-width: 1200px;
    margin: auto;
    padding: 0 20px;
}

/* NAVBAR */
.navbar {
    position: fixed;
    top: 0;
    width: 100%;
    background: rgba(255,255,255,0.85);
    backdrop-filter: blur(10px);
    box-shadow: 0 2px 20px rgba(0,0,0,0.08);
    z-index: 1000;
}

.navbar .container {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 70px;
}

.navbar a {
    color: #0f172a;
    font-weight: 600;
    text-decoration: none;
}

/* HERO */
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
}

.hero-content {
    background: #ffffff;
    padding: 60px;
    border-radius: 20px;
    max-width: 720px;
    box-shadow: 0 30px 80px rgba(0,0,0,0.12);
}

.hero h1 {
    font-size: 3rem;
    color: #0f172a;
    margin-bottom: 10px;
}

.hero h3 {
    color: #475569;
    margin-bottom: 20px;
}

.hero p {
    color: #334155;
    margin-bottom: 32px;
    line-height: 1.7;
}

/* BUTTONS */
.hero-buttons {
    display: flex;
    gap: 16px;
}

.btn {
    padding: 12px 26px;
    border-radius: 10px;
    border: 2px solid #22c55e;
    background: transparent;
    color: #166534;
    font-weight: 600;
    cursor: pointer;
}

.btn.primary {
    background: #22c55e;
    color: #ffffff;
}

/* SECTIONS */
section {
    padding: 110px 0;
}

section h2 {
    font-size: 2.2rem;
    color: #0f172a;
    margin-bottom: 20px;
}

/* CARDS */
.card {
    background: #ffffff;
    padding: 28px;
    border-radius: 18px;
    margin-bottom: 24px;
    box-shadow: 0 20px 60px rgba(0,0,0,0.08);
}
"#;

/// Prepends `BASE_CSS` to whatever the model produced. No deduplication.
pub fn enhance_css(model_css: &str) -> String {
    let mut css = String::with_capacity(BASE_CSS.len() + 2 + model_css.len());
    css.push_str(BASE_CSS);
    css.push_str("\n\n");
    css.push_str(model_css);
    css
}
