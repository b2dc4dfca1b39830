pub const STOREFRONT_STYLES: &str = r#"
:root {
    --radius-sm: 6px;
    --radius-md: 8px;
    --radius-lg: 12px;
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.12);
    --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.16);
}

:root[data-theme="dark"] {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --accent-text: #ffffff;
    --border-color: #334155;
    --card-bg: var(--bg-secondary);
    --hover-bg: rgba(255, 255, 255, 0.08);
    --danger-text: #f87171;
    --success-text: #34d399;
}

:root[data-theme="light"] {
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #64748b;
    --accent-bg: #2563eb;
    --accent-bg-hover: #1d4ed8;
    --accent-text: #ffffff;
    --border-color: #cbd5e1;
    --card-bg: #ffffff;
    --hover-bg: rgba(15, 23, 42, 0.06);
    --danger-text: #b91c1c;
    --success-text: #047857;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.header,
.landing-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--bg-secondary);
    border-bottom: 1px solid var(--border-color);
}

.header-actions,
.landing-header-actions {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.landing-logo h1 {
    margin: 0;
    font-size: 1.5rem;
}

.landing-logo p {
    margin: 0.25rem 0 0;
    color: var(--text-secondary);
    font-size: 0.875rem;
}

.theme-toggle-container {
    position: relative;
}

.theme-toggle-button,
.theme-option,
.login-btn,
.register-btn,
.cta-button,
.view-product-btn,
.add-to-cart-btn {
    cursor: pointer;
    border-radius: var(--radius-md);
    font-size: 0.875rem;
    padding: 0.5rem 1rem;
}

.theme-toggle-button {
    display: flex;
    align-items: center;
    gap: 0.4rem;
    background: transparent;
    color: var(--text-primary);
    border: 1px solid var(--border-color);
}

.theme-dropdown {
    position: absolute;
    right: 0;
    top: calc(100% + 0.25rem);
    display: flex;
    flex-direction: column;
    min-width: 8rem;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    box-shadow: var(--shadow-md);
    z-index: 10;
}

.theme-option {
    background: transparent;
    color: var(--text-primary);
    border: none;
    text-align: left;
}

.theme-option:hover {
    background: var(--hover-bg);
}

.theme-option.active {
    font-weight: 600;
    color: var(--accent-bg);
}

.cart-icon {
    position: relative;
    cursor: pointer;
    width: 2rem;
    height: 2rem;
}

.cart-icon-svg {
    width: 100%;
    height: 100%;
}

.cart-badge {
    position: absolute;
    top: -0.4rem;
    right: -0.6rem;
    min-width: 1.25rem;
    padding: 0 0.3rem;
    border-radius: 999px;
    background: var(--accent-bg);
    color: var(--accent-text);
    font-size: 0.7rem;
    text-align: center;
}

.cart-badge--loading {
    opacity: 0.6;
}

.login-btn {
    background: transparent;
    color: var(--text-primary);
    border: 1px solid var(--border-color);
}

.register-btn,
.cta-button.primary,
.cta-button.large,
.view-product-btn,
.add-to-cart-btn {
    background: var(--accent-bg);
    color: var(--accent-text);
    border: none;
}

.add-to-cart-btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.cta-button.secondary {
    background: transparent;
    color: var(--text-primary);
    border: 1px solid var(--border-color);
}

.hero-section,
.cta-section {
    padding: 4rem 2rem;
    text-align: center;
}

.hero-buttons {
    display: flex;
    justify-content: center;
    gap: 1rem;
}

.section-container,
.offers-container {
    max-width: 72rem;
    margin: 0 auto;
    padding: 2rem;
}

.offers-container,
.categories-grid,
.branding-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
    gap: 1rem;
}

.products-grid,
.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
    gap: 1.25rem;
}

.offer-card,
.category-card,
.branding-card,
.product-card,
.product-card-landing {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-lg);
    padding: 1rem;
    box-shadow: var(--shadow-sm);
}

.category-card {
    cursor: pointer;
    text-align: center;
}

.category-card:hover {
    background: var(--hover-bg);
}

.product-image-container,
.product-image-wrapper {
    position: relative;
}

.product-image-landing,
.product-image {
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
    border-radius: var(--radius-md);
}

.product-badge {
    position: absolute;
    top: 0.5rem;
    left: 0.5rem;
    padding: 0.15rem 0.5rem;
    border-radius: var(--radius-sm);
    background: var(--accent-bg);
    color: var(--accent-text);
    font-size: 0.7rem;
}

.product-description-landing,
.product-description {
    color: var(--text-secondary);
    font-size: 0.875rem;
}

.price-current,
.product-price {
    font-weight: 600;
}

.price-original {
    margin-left: 0.5rem;
    color: var(--text-muted);
    text-decoration: line-through;
}

.product-stock {
    margin-left: 0.5rem;
    color: var(--success-text);
    font-size: 0.8rem;
}

.product-stock--out {
    color: var(--danger-text);
}

.loading-message,
.no-products-message,
.no-products {
    padding: 2rem;
    text-align: center;
    color: var(--text-muted);
}

.landing-footer {
    padding: 2rem;
    background: var(--bg-secondary);
    border-top: 1px solid var(--border-color);
}

.footer-content {
    display: flex;
    flex-wrap: wrap;
    gap: 3rem;
    max-width: 72rem;
    margin: 0 auto;
}

.footer-section {
    display: flex;
    flex-direction: column;
    gap: 0.35rem;
}

.footer-section a {
    color: var(--text-secondary);
    text-decoration: none;
}

.footer-bottom {
    text-align: center;
    color: var(--text-muted);
    font-size: 0.8rem;
}

@media (max-width: 640px) {
    .landing-header {
        flex-direction: column;
        gap: 0.75rem;
    }

    .hero-buttons {
        flex-direction: column;
    }
}
"#;
