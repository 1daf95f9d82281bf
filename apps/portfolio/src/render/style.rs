/// Page stylesheet, inlined into every document head.
pub const STYLESHEET: &str = r#"
@font-face{font-family:"Hacker";src:url("/static/fonts/hacker-medium.woff2") format("woff2");font-weight:100 900;font-display:swap}
*{box-sizing:border-box}
body{margin:0;min-height:100vh;background:#EFEBE5 url("/static/bg/10.png") center/cover no-repeat;color:#000;font-family:"Hacker",ui-monospace,monospace;line-height:1.5}
a{color:inherit}
.container{max-width:64rem;margin:0 auto;padding:2rem 1rem 6rem}
section{padding:3rem 0}
h1{font-size:2.75rem;margin:0 0 1rem}
h2{font-size:1.875rem;margin:0 0 1.5rem}
.hero{display:flex;flex-wrap:wrap;gap:2rem;align-items:flex-start;justify-content:space-between}
.hero-text{flex:1 1 20rem}
.subtitle{font-size:1.25rem;margin:0 0 1.5rem}
.badges{display:flex;flex-wrap:wrap;gap:.75rem;font-size:.875rem}
.industry{text-decoration:underline}
.avatar{width:11rem;height:11rem;border:1px solid #000;border-radius:50%;overflow:hidden;display:flex;align-items:center;justify-content:center;background:#e5e7eb}
.avatar img{width:100%;height:100%;object-fit:cover}
.initials{font-size:1.875rem;font-weight:700;color:#6b7280}
.prose,.lead{max-width:48rem}
.card{border:1px solid #000;border-radius:.75rem;padding:1.25rem;margin-bottom:1.5rem}
.position+.position{margin-top:1rem}
.position-head,.language-head{display:flex;flex-wrap:wrap;justify-content:space-between;gap:.5rem}
.tenure,.employment-type,.position-location,.card-meta,.proficiency{font-size:.875rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));gap:1.5rem}
.school{display:flex;gap:1rem}
.logo{width:3rem;height:3rem;flex-shrink:0;border:1px solid #000;border-radius:.5rem;display:flex;align-items:center;justify-content:center;overflow:hidden}
.tags{display:flex;flex-wrap:wrap;gap:.5rem;margin-top:.75rem}
.tag{border:1px solid #000;padding:.25rem .75rem;border-radius:9999px;font-size:.875rem}
.skills .tag{border-radius:.5rem;padding:.5rem 1rem}
.skills .tag:hover{background:#000;color:#fff}
.bar{width:100%;height:.5rem;border:1px solid #000;border-radius:9999px;background:#EFEBE5;margin-top:.5rem}
.bar-fill{height:100%;background:#000;border-radius:9999px}
.card-image{width:100%;border-radius:.5rem}
.gallery{display:grid;grid-template-columns:repeat(auto-fill,minmax(12rem,1fr));gap:1rem}
.gallery img{width:100%;border-radius:.5rem}
.contact{list-style:none;padding:0}
.social{display:flex;flex-wrap:wrap;gap:1rem}
.floating-nav{position:fixed;bottom:2rem;left:50%;transform:translateX(-50%);display:flex;gap:1.5rem;padding:.75rem 1.5rem;border:1px solid #000;border-radius:9999px;background:rgba(255,255,255,.8);backdrop-filter:blur(12px)}
.floating-nav a{text-decoration:none}
.floating-nav a:hover{text-decoration:underline}
footer{padding:2rem 0}
.footer-row{display:flex;justify-content:space-between;padding-top:0;padding-bottom:0;font-size:.875rem}
.not-found{text-align:center;padding-top:8rem}
"#;
