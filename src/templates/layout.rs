use super::RenderContext;

/// Escape text for safe interpolation into HTML
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Header with logo, date and short reference; footer with validation hint and full hash
pub fn wrap_contract_layout(content: &str, ctx: &RenderContext) -> String {
    let reference = escape_html(&ctx.reference);
    let short_reference: String = reference.chars().take(9).collect();

    format!(
        r#"
    <div style="font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #334155;">
      <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 3rem; padding-bottom: 1.5rem; border-bottom: 2px solid #e2e8f0;">
        <img src="{logo}" alt="Logo" style="height: 40px; object-fit: contain;" />
        <div style="text-align: right; font-size: 0.8rem; color: #64748b;">
          <strong>Data:</strong> {date}<br/>
          <strong>Ref:</strong> {short_reference}
        </div>
      </div>

      {content}

      <div style="margin-top: 5rem; padding-top: 2rem; border-top: 1px solid #e2e8f0; text-align: center; font-size: 0.75rem; color: #94a3b8;">
        <p style="margin-bottom: 0.5rem; font-weight: 600; color: #475569;">Documento assinado digitalmente via Assinador Seguro</p>
        <p>A autenticidade deste documento pode ser conferida no site {origin}/validar através do código QR ou hash abaixo.</p>
        <p style="font-family: monospace; margin-top: 0.5rem;">HASH: {reference}</p>
      </div>
    </div>
  "#,
        logo = escape_html(&ctx.logo_src),
        date = ctx.display_date(),
        short_reference = short_reference,
        content = content,
        origin = escape_html(ctx.origin.trim_end_matches('/')),
        reference = reference,
    )
}

/// Signature block with an invisible anchor the signing backend searches for
pub fn render_signature(name: &str, role: &str, label: &str, anchor: &str, width: &str) -> String {
    let shown = if name.trim().is_empty() {
        escape_html(role)
    } else {
        escape_html(name)
    };

    format!(
        r#"
    <div style="text-align: center; width: {width}; position: relative;">
      <p style="color: white; font-size: 1pt; margin: 0; position: absolute; top: -15px; left: 0; right: 0; z-index: -1;">{anchor}</p>
      <div style="border-top: 1px solid #000; padding-top: 10px;">
        <strong>{shown}</strong><br/>
        <span>{label}</span>
      </div>
    </div>
  "#,
        width = width,
        anchor = anchor,
        shown = shown,
        label = escape_html(label),
    )
}

/// Unnamed witness line with its own anchor
pub fn render_witness(index: u8) -> String {
    format!(
        r#"
            <div style="text-align: center; width: 48%; position: relative;">
              <p style="color: white; font-size: 1pt; margin: 0; position: absolute; top: -15px; left: 0; right: 0; z-index: -1;">{{{{SIGNATURE_TESTEMUNHA_{index}}}}}</p>
              <div style="border-top: 1px solid #000; padding-top: 10px;">
                <span>Testemunha {index}</span><br/>
                <span>CPF: __________________</span>
              </div>
            </div>"#,
        index = index
    )
}

/// Two signature blocks side by side
pub fn signature_row(blocks: &[String]) -> String {
    format!(
        r#"<div style="display: flex; justify-content: space-between; margin-top: 40px; gap: 20px;">
            {}
          </div>"#,
        blocks.join("\n            ")
    )
}

/// A single centered signature block
pub fn signature_centered(block: &str) -> String {
    format!(
        r#"<div style="display: flex; justify-content: center; margin-top: 40px;">
            {}
          </div>"#,
        block
    )
}

/// HTML document Word opens as a `.doc`
pub fn word_document(title: &str, content: &str) -> String {
    format!(
        r#"
      <html xmlns:o='urn:schemas-microsoft-com:office:office' xmlns:w='urn:schemas-microsoft-com:office:word' xmlns='http://www.w3.org/TR/REC-html40'>
      <head><meta charset='utf-8'><title>{}</title></head>
      <body>{}</body>
      </html>
    "#,
        escape_html(title),
        content
    )
}

/// Standalone HTML page uploaded as the file of a send-for-signature flow
pub fn send_document(title: &str, content: &str) -> String {
    format!(
        r#"
      <!DOCTYPE html>
      <html>
      <head>
        <meta charset="utf-8">
        <title>{}</title>
        <style>
          body {{ font-family: 'Inter', sans-serif; line-height: 1.6; color: #334155; max-width: 800px; margin: 0 auto; padding: 2rem; }}
          h2, h3 {{ text-align: center; color: #0f172a; }}
        </style>
      </head>
      <body>
        {}
      </body>
      </html>
    "#,
        escape_html(title),
        content
    )
}
