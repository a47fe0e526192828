//! Dashboard stylesheet

/// Page layout, sidebar controls and the card grid
pub const STYLESHEET: &str = r#"
    body {
        margin: 0;
        font-family: "Source Sans Pro", -apple-system, "Segoe UI", Roboto, sans-serif;
        color: #31333f;
        background: #ffffff;
    }

    .layout {
        display: flex;
        min-height: 100vh;
    }

    .sidebar {
        flex: 0 0 280px;
        background: #f0f2f6;
        padding: 2rem 1.5rem;
    }

    .sidebar label {
        display: block;
        margin-top: 1.5rem;
        font-size: 0.9rem;
    }

    .sidebar .help {
        display: block;
        color: #808495;
        font-size: 0.75rem;
    }

    .sidebar input[type=range] {
        width: 100%;
    }

    .sidebar output {
        font-weight: 600;
        color: #ff4b4b;
    }

    .main {
        flex: 1;
        padding: 2rem 3rem;
        max-width: 1100px;
    }

    .warning {
        background: #fffce7;
        border-left: 4px solid #ffbd45;
        color: #926c05;
        padding: 1rem;
        border-radius: 6px;
    }

    .error {
        background: #ffecec;
        border-left: 4px solid #ff4b4b;
        color: #7d353b;
        padding: 1rem;
        border-radius: 6px;
    }

    .grid-container {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
        gap: 1rem;
        padding: 1rem;
    }

    .card {
        background: #ffffff;
        border: 1px solid #e0e0e0;
        border-radius: 10px;
        padding: 1.2rem;
        transition: transform 0.2s, box-shadow 0.2s;
    }

    .card:hover {
        transform: translateY(-3px);
        box-shadow: 0 4px 12px rgba(0,0,0,0.1);
        cursor: pointer;
    }

    .antecedent {
        color: #2c3e50;
        font-weight: 600;
        margin-bottom: 0.5rem;
    }

    .consequent {
        color: #27ae60;
        font-weight: 600;
        margin: 0.8rem 0;
    }

    .metrics {
        display: flex;
        justify-content: space-between;
        margin-top: 1rem;
        font-size: 0.9rem;
    }

    .success-rate {
        color: #2980b9;
    }

    .frequency {
        color: #7f8c8d;
    }

    .scatter circle:hover {
        stroke: #2c3e50;
        stroke-width: 2;
    }
"#;
