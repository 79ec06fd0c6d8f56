//! The fixed QA checklist: three audits run against every target page, each
//! with its own agent display name, report category, and step budget.

/// One checklist audit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistKind {
    ProductPage,
    ImageValidation,
    ErrorDetection,
}

impl ChecklistKind {
    /// Run order is fixed: structure first, then media, then runtime errors.
    pub const ALL: [ChecklistKind; 3] = [
        ChecklistKind::ProductPage,
        ChecklistKind::ImageValidation,
        ChecklistKind::ErrorDetection,
    ];

    /// Display name used in progress output and failure messages.
    pub fn agent_name(self) -> &'static str {
        match self {
            ChecklistKind::ProductPage => "Product Page",
            ChecklistKind::ImageValidation => "Image Validation",
            ChecklistKind::ErrorDetection => "Error Detection",
        }
    }

    /// Category stamped on every record this audit produces.
    pub fn category(self) -> &'static str {
        match self {
            ChecklistKind::ProductPage => "Product Page Validation",
            ChecklistKind::ImageValidation => "Image Validation",
            ChecklistKind::ErrorDetection => "Error Detection",
        }
    }

    /// Step budget handed to the agent. Image audits scroll through galleries
    /// and lazy-loaded media, so they get twice the budget.
    pub fn max_steps(self) -> u32 {
        match self {
            ChecklistKind::ProductPage => 20,
            ChecklistKind::ImageValidation => 40,
            ChecklistKind::ErrorDetection => 20,
        }
    }

    /// Render the task brief handed to the agent for one target URL.
    pub fn task_for(self, url: &str) -> String {
        match self {
            ChecklistKind::ProductPage => product_page_task(url),
            ChecklistKind::ImageValidation => image_validation_task(url),
            ChecklistKind::ErrorDetection => error_detection_task(url),
        }
    }
}

fn product_page_task(url: &str) -> String {
    format!(
        r#"You are a QA agent testing an ecommerce product page.

Steps:
1. Navigate to the target URL.
2. Confirm the page loads within the timeout.
3. Validate presence of:
   - Product title
   - Product price
   - Product description
   - Add-to-cart button
   - Product variants (if any)
4. Check page title & meta description exist.
5. Report missing or broken elements clearly.
6. Always output results in structured JSON format with keys:
   "category", "success", "partial", "details"

Details should include:
- product_elements with all extracted info
- SEO metadata status
- any issues or missing elements

Target URL: {url}
"#
    )
}

fn image_validation_task(url: &str) -> String {
    format!(
        r#"You are a QA agent testing an ecommerce product page for image quality.

Your task is to verify that all visible images load correctly, have proper
dimensions, and contain accessibility attributes (alt text).

OUTPUT REQUIREMENTS:
- Return only a single valid JSON object.
- No explanations, markdown, or text outside JSON.
- Follow the exact schema below.
- If some images are missing or broken, set "partial": true and list them in "issues".

JSON schema:
{{
  "category": "Image Validation",
  "success": true | false,
  "partial": true | false,
  "details": {{
    "images": [
      {{
        "src": "string (image URL)",
        "alt": "string or empty",
        "width": number | null,
        "height": number | null,
        "status": "ok | broken | missing alt"
      }}
    ],
    "issues": ["list of strings describing missing/broken images"]
  }}
}}

Example, missing alt text and broken image:
{{
  "category": "Image Validation",
  "success": false,
  "partial": true,
  "details": {{
    "images": [
      {{"src": "https://example.com/img1.jpg", "alt": "", "width": 800, "height": 800, "status": "missing alt"}},
      {{"src": "https://example.com/img2.jpg", "alt": "Side view", "width": null, "height": null, "status": "broken"}}
    ],
    "issues": ["Image img1.jpg missing alt text", "Image img2.jpg failed to load"]
  }}
}}

Additional instructions:
- Scroll and wait for lazy-loaded images.
- Capture dimensions for all visible images.
- Include all images: primary, gallery, banners, logos.
- Mark missing/broken images in "issues" and set partial=true if any problems occur.

Target URL: {url}
"#
    )
}

fn error_detection_task(url: &str) -> String {
    format!(
        r#"You are a QA agent detecting errors on an ecommerce page.

Steps:
1. Capture JavaScript console errors and uncaught exceptions.
2. Capture network failures (4xx, 5xx).
3. Detect resource loading failures (CSS, JS, images).
4. Identify CORS errors.
5. Report third-party script failures (analytics, payments).
6. Check for performance warnings and security issues.
7. Always output results in structured JSON format with keys:
   "category", "success", "partial", "details"

Details should include:
- all detected errors with type, code, message
- partial success if some errors could not be checked

Target URL: {url}
"#
    )
}
