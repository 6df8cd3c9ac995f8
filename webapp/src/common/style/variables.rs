// dark is the default palette; the light one applies while <html data-theme="light">
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #60A5FA;
  --primary-dark: #3B82F6;
  --accent: #A78BFA;

  --success: #34D399;
  --error: #F87171;

  /* Background and Surface Colors */
  --background: #0F172A;
  --surface: #1E293B;
  --surface-raised: #273449;

  /* Text Colors */
  --text-primary: #F1F5F9;
  --text-secondary: #CBD5E1;
  --text-tertiary: #94A3B8;

  --border: #334155;
  --overlay: rgba(2, 6, 23, 0.6);

  /* Layout */
  --header-height: 64px;
  --container-width: 1120px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.3);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.4);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 600ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

[data-theme="light"] {
  --primary: #2563EB;
  --primary-dark: #1D4ED8;
  --accent: #7C3AED;

  --success: #059669;
  --error: #DC2626;

  --background: #F8FAFC;
  --surface: #FFFFFF;
  --surface-raised: #F1F5F9;

  --text-primary: #0F172A;
  --text-secondary: #334155;
  --text-tertiary: #64748B;

  --border: #E2E8F0;
  --overlay: rgba(15, 23, 42, 0.4);

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}
"#;
