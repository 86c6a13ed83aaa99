/// Stylesheet of the size guide page. Hosts inject it into the document head.
pub const STYLESHEET: &str = r"
:root {
    --atelier-rose: #d9467a;
    --atelier-rose-soft: #fde7ef;
    --atelier-ink: #2f2330;
    --atelier-muted: #6f6270;
    --atelier-card: #ffffff;
    --atelier-page: #fff8fb;
    --atelier-radius: 18px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: var(--atelier-ink);
    background: var(--atelier-page);
}

.size-guide { max-width: 1120px; margin: 0 auto; padding: 48px 24px 96px; }

.size-guide__hero { text-align: center; padding: 48px 0 24px; }
.size-guide__hero h1 { font-size: 3rem; margin: 16px 0 12px; }
.size-guide__lead { max-width: 640px; margin: 0 auto; color: var(--atelier-muted); font-size: 1.125rem; }
.size-guide__badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 6px 14px;
    border-radius: 999px;
    background: var(--atelier-rose-soft);
    color: var(--atelier-rose);
    font-weight: 600;
    font-size: 0.875rem;
}

.size-guide__section { padding: 48px 0; }
.section-heading { text-align: center; margin-bottom: 32px; }
.section-heading h2 { font-size: 2rem; margin: 0 0 8px; }
.section-heading p { margin: 0; color: var(--atelier-muted); }

.size-chart__grid, .tips__grid {
    display: grid;
    gap: 24px;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
}

.size-card, .tip-card, .note {
    height: 100%;
    padding: 24px;
    border-radius: var(--atelier-radius);
    background: var(--atelier-card);
    box-shadow: 0 10px 30px rgba(217, 70, 122, 0.08);
}
.size-card__name { margin: 0 0 16px; color: var(--atelier-rose); }
.size-card__measurements { margin: 0 0 16px; }
.size-card__row {
    display: flex;
    justify-content: space-between;
    padding: 6px 0;
    border-bottom: 1px dashed var(--atelier-rose-soft);
}
.size-card__row dt { font-weight: 600; }
.size-card__row dd { margin: 0; color: var(--atelier-muted); }
.size-card__description { margin: 0; font-size: 0.9rem; color: var(--atelier-muted); }

.tip-card { text-align: center; }
.tip-card__icon {
    display: inline-flex;
    padding: 14px;
    border-radius: 50%;
    background: var(--atelier-rose-soft);
    color: var(--atelier-rose);
}
.tip-card h3 { margin: 16px 0 8px; }
.tip-card p { margin: 0; color: var(--atelier-muted); }

.notes__list { display: grid; gap: 16px; max-width: 760px; margin: 0 auto; }
.note { border-left: 4px solid var(--atelier-rose); }
.note__title { margin: 0 0 6px; }
.note__content { margin: 0; color: var(--atelier-muted); }

.cta__panel {
    text-align: center;
    padding: 48px 24px;
    border-radius: var(--atelier-radius);
    background: linear-gradient(135deg, var(--atelier-rose), #9b5de5);
    color: #ffffff;
}
.cta__panel h2 { font-size: 2rem; margin: 0 0 12px; }
.cta__panel p { margin: 0 auto 24px; max-width: 520px; opacity: 0.9; }
.cta__button {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 14px 28px;
    border-radius: 999px;
    background: #ffffff;
    color: var(--atelier-rose);
    font-weight: 700;
    text-decoration: none;
    transition: transform 0.2s ease;
}
.cta__button:hover { transform: translateY(-2px); }

@keyframes reveal-fade-up {
    from { opacity: 0; transform: translateY(24px); }
    to { opacity: 1; transform: none; }
}
@keyframes reveal-fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes reveal-scale-in {
    from { opacity: 0; transform: scale(0.92); }
    to { opacity: 1; transform: none; }
}

.reveal { animation-fill-mode: both; animation-timing-function: cubic-bezier(0.22, 1, 0.36, 1); }
.reveal--fade-up { animation-name: reveal-fade-up; }
.reveal--fade-in { animation-name: reveal-fade-in; }
.reveal--scale-in { animation-name: reveal-scale-in; }

@supports (animation-timeline: view()) {
    .reveal--in-view {
        animation-timeline: view();
        animation-range: entry 0% cover 30%;
        animation-delay: 0ms !important;
    }
}

.reveal--static { animation: none !important; }

@media (prefers-reduced-motion: reduce) {
    .reveal { animation: none !important; }
}
";
