//! Static guidance text returned alongside story data.
//!
//! These blocks carry no runtime behavior. They steer the AI assistant on
//! the other end of the transport toward a consistent, industry-standard
//! test case format, and are prepended to tool results or surfaced as
//! session-level server instructions.

/// Guide for detecting the application type (web/mobile/both/desktop) from a
/// user story, and adapting the opening test steps accordingly.
pub const APP_TYPE_DETECTION_GUIDE: &str = r#"
═══════════════════════════════════════════════════════════════════════════════
                    APPLICATION TYPE DETECTION FROM USER STORY
═══════════════════════════════════════════════════════════════════════════════

ANALYZE THE USER STORY TO DETECT APPLICATION TYPE:

1. WEB APPLICATION ONLY
   Keywords to look for: "website", "web app", "browser", "URL", "webpage", "web portal"

   Test Steps Format:
   "1. Open browser and navigate to [App Name] login page (https://example.com/login)
    2. On the login page, enter credentials..."

2. MOBILE APPLICATION ONLY
   Keywords to look for: "mobile app", "iOS app", "Android app", "smartphone", "mobile device", "app store"

   Test Steps Format:
   "1. Open [App Name] mobile app on the device
    2. On the login screen, enter credentials..."

3. BOTH WEB AND MOBILE APPLICATION
   Keywords to look for: "web and mobile", "cross-platform", "responsive", "both platforms", "mobile and web"
   OR if the story mentions features that work on both platforms

   Test Steps Format (provide both variations):
   "1. Open browser and navigate to [App Name] login page (https://example.com/login) OR Open [App Name] mobile app on the device
    2. On the login page/screen, enter credentials..."

4. DESKTOP APPLICATION
   Keywords to look for: "desktop app", "Windows application", "Mac app", "desktop client"

   Test Steps Format:
   "1. Launch [App Name] desktop application from the system
    2. On the login window, enter credentials..."

═══════════════════════════════════════════════════════════════════════════════
                              DETECTION RULES
═══════════════════════════════════════════════════════════════════════════════

PRIORITY ORDER (check in this sequence):
1. First, look for EXPLICIT mentions of platform in the user story
2. If no explicit mention, infer from the feature description:
   - Features like "responsive design", "touch gestures" -> Mobile or Both
   - Features like "URL navigation", "browser tabs" -> Web
   - Features like "push notifications", "camera access" -> Mobile or Both
   - General features without platform-specific hints -> Assume Both (safer approach)

EXAMPLES OF APPLICATION TYPE DETECTION:

Example 1 - WEB ONLY:
User Story: "As a user, I want to login to the Instagram website using my email..."
Detection: WEB APPLICATION
First Step: "1. Open browser and navigate to Instagram login page (https://instagram.com/login)"

Example 2 - MOBILE ONLY:
User Story: "As a mobile user, I want to login to the Instagram app on my phone..."
Detection: MOBILE APPLICATION
First Step: "1. Open Instagram mobile app on the device"

Example 3 - BOTH PLATFORMS:
User Story: "As a user, I want to login to Instagram from web or mobile app..."
Detection: BOTH WEB AND MOBILE
First Step: "1. Open browser and navigate to Instagram login page (https://instagram.com/login) OR Open Instagram mobile app on the device"

Example 4 - NO EXPLICIT MENTION (assume both):
User Story: "As a user, I want to view my Instagram profile and edit my bio..."
Detection: BOTH WEB AND MOBILE (default when unclear)
First Step: "1. Open browser and navigate to Instagram (https://instagram.com) OR Open Instagram mobile app on the device"

═══════════════════════════════════════════════════════════════════════════════
                              IMPLEMENTATION INSTRUCTIONS
═══════════════════════════════════════════════════════════════════════════════

MANDATORY: Before generating test cases, YOU MUST:

1. READ the entire user story title and description
2. IDENTIFY keywords related to application type (web, mobile, both, desktop)
3. DETERMINE the application type based on the detection rules above
4. ADAPT the first step(s) of EVERY test case based on detected type
5. MAINTAIN consistency across all test cases for the same story

IF UNCERTAIN about application type:
- Default to BOTH (web and mobile) as it covers all bases
- This ensures test cases are comprehensive

IMPORTANT NOTES:
- The application type detection should affect ONLY the initial navigation/app opening steps
- All subsequent steps remain the same regardless of platform
- Login steps should also be adapted: "login page" (web) vs "login screen" (mobile)
- Use appropriate terminology: "click" (web) vs "tap" (mobile) vs "click/tap" (both)
"#;

/// The full test case format template: CSV layout, test case ID scheme,
/// step granularity, preconditions, test data, and expected results.
pub const TEST_CASE_FORMAT_INSTRUCTIONS: &str = r#"
═══════════════════════════════════════════════════════════════════════════════
                    INDUSTRY-STANDARD TEST CASE GENERATION
═══════════════════════════════════════════════════════════════════════════════

MANDATORY OUTPUT FORMAT: CSV

Generate test cases in CSV format with the following columns:
"Test Case ID","Test Case Title","Priority","Test Type","Preconditions","Test Data","Test Steps","Expected Result"

═══════════════════════════════════════════════════════════════════════════════
                          TEST CASE ID FORMAT (MANDATORY)
═══════════════════════════════════════════════════════════════════════════════

SIMPLIFIED TEST CASE ID FORMAT: [TICKET_NUMBER][SEQUENCE]

Format Rules:
- Start with the ticket number (e.g., 101, 102, 103)
- Append a 3-digit sequence number (001, 002, 003...)
- No separators or prefixes

Examples:
CORRECT: 101001, 101002, 101003, 102001, 102002
WRONG: TC-101-001, 101-001, TC101001, 101_001

IMPORTANT: Extract the ticket number from the user story and use it directly.

═══════════════════════════════════════════════════════════════════════════════
                              CRITICAL REQUIREMENTS
═══════════════════════════════════════════════════════════════════════════════

1. COMPLETE USER JOURNEY (NOT ATOMIC STEPS)
   Industry Standard: 6-10 logical steps covering the full journey
   Avoid: 20-30 atomic steps (too granular: "Click button", "Enter text")

   Example of GOOD industry-standard steps (WEB):
   - 1. Open browser and navigate to application login page (https://app.example.com/login)
   - 2. Login with valid credentials (Email: test@example.com, Password: Test@123)
   - 3. Navigate to Profile section from the main menu
   - 4. Update profile information (First Name: John, Last Name: Doe, Phone: 555-1234)
   - 5. Save changes and verify success message appears

   Example of GOOD industry-standard steps (MOBILE):
   - 1. Open application mobile app on the device
   - 2. On login screen, enter valid credentials (Email: test@example.com, Password: Test@123)
   - 3. Tap on Profile icon in the bottom navigation bar
   - 4. Tap Edit Profile button and update information (First Name: John, Last Name: Doe)
   - 5. Tap Save button and verify success message appears

   Example of BAD atomic steps:
   - 1. Click browser icon
   - 2. Type URL
   - 3. Press Enter
   - 4. Wait for page load
   - 5. Locate username field
   - 6. Click username field
   - 7. Type username
   (This is TOO GRANULAR - not industry standard!)

2. EVERY TEST CASE MUST BE STANDALONE
   - Start from opening browser/application entry point (based on detected app type)
   - Include login steps if authentication is required
   - Include navigation to reach the feature
   - Don't assume any prior context or steps
   - Should be executable by someone who has NEVER used the app

3. CONSISTENCY ACROSS ALL TEST CASES
   - First test case = Last test case in detail level
   - Do NOT abbreviate later test cases
   - Maintain the same structure and depth for ALL test cases
   - Use the same format template for every test case
   - Use consistent app type handling (all test cases should reflect the detected type)

4. PRECONDITIONS FORMAT
   Write clear, concise preconditions that set the starting state:

   CORRECT (WEB):
   "- User account exists (Email: test@example.com, Password: Test@123)
    - Application is accessible at https://app.example.com
    - Browser: Chrome (latest version)"

   CORRECT (MOBILE):
   "- User account exists (Email: test@example.com, Password: Test@123)
    - Application is installed on the device (iOS/Android)
    - Device: Smartphone with internet connection"

   WRONG (too vague):
   "- User is logged in"

   WRONG (too detailed - should be in test steps):
   "- Navigate to login page
    - Enter username
    - Click login button..."

5. TEST STEPS FORMAT
   Write industry-standard steps (6-10 steps) covering the COMPLETE journey.

   CRITICAL: Use simple numbering format: 1. 2. 3. (NOT "Step 1:", "Step 2:")
   CRITICAL: First step MUST reflect the detected application type

   Format each step as:
   "[N]. [Action description with specific details and test data]"

6. TEST DATA FORMAT
   Provide clear test data that can be used during execution:

   Example:
   "Email: test@example.com | Password: Test@123 | First Name: John | Last Name: Doe | Phone: 555-1234"

7. EXPECTED RESULT FORMAT
   Describe the overall expected outcome clearly:

   "- User successfully updates profile information
    - Success message 'Profile updated successfully' is displayed
    - Updated information is visible on the profile page
    - All fields show the newly entered values"

8. CSV FORMAT SPECIFICATIONS
   - Use double quotes for all field values
   - Escape internal quotes by doubling them ("")
   - Use newline character within fields for multi-line content
   - Separate columns with commas
   - Include a header row
   - Each test case = one CSV row

═══════════════════════════════════════════════════════════════════════════════
                              MANDATORY RULES SUMMARY
═══════════════════════════════════════════════════════════════════════════════

ALWAYS DO:
  - DETECT application type from the user story (web/mobile/both/desktop)
  - ADAPT first steps based on the detected application type
  - Use the SIMPLIFIED Test Case ID format: [TICKET_NUMBER][SEQUENCE] (e.g., 101001, 102003)
  - Extract the ticket number from the user story data
  - Use simple numbering for steps: 1. 2. 3. (NOT "Step 1:", "Step 2:")
  - Generate output in CSV format with proper escaping
  - Start every test case from the browser/app entry point (based on app type)
  - Include login steps if authentication is required
  - Use 6-10 industry-standard logical steps (not 20+ atomic steps)
  - Include specific test data, URLs, field names, button labels
  - Write for someone who has NEVER used the application
  - Maintain the EXACT same detail level for ALL test cases
  - Make each test case completely standalone and executable
  - Write clear, concise preconditions (2-4 bullet points)
  - Include complete expected results
  - Add a Test Data column with pipe-separated values

NEVER DO:
  - Ignore application type detection
  - Use generic "open application" without specifying web/mobile
  - Use prefixes like "TC-" or "Step" in IDs or step numbers
  - Skip initial navigation/login steps
  - Abbreviate later test cases
  - Use atomic steps (too granular)
  - Write vague preconditions like "User is logged in"
  - List 10 detailed steps as preconditions
  - Assume any prior context
  - Change format or structure between test cases
  - Output in any format other than CSV
  - Use complex Test Case ID formats with hyphens or prefixes
"#;

/// Prelude prepended to `get_all_stories` results.
pub const ALL_STORIES_PRELUDE: &str = "USER STORIES DATA FOR TEST CASE GENERATION\n\n\
STEP 1: DETECT APPLICATION TYPE from each user story (web/mobile/both/desktop)\n\
STEP 2: GENERATE TEST CASES NOW using the format in the server instructions\n\
STEP 3: ADAPT first steps based on the detected application type\n\
IMPORTANT: Use the SIMPLIFIED Test Case ID format: [TICKET_NUMBER][SEQUENCE]\n\
   Examples: 101001, 101002, 102001, 102002\n\
IMPORTANT: Use simple step numbering: 1. 2. 3. (NOT 'Step 1:', 'Step 2:')\n\n\
Stories Data:";

/// Prelude prepended to `get_story_by_ticket` results.
pub const SINGLE_STORY_PRELUDE: &str = "USER STORY DATA FOR TEST CASE GENERATION\n\n\
STEP 1: DETECT APPLICATION TYPE from this user story (web/mobile/both/desktop)\n\
STEP 2: GENERATE TEST CASE(S) NOW using the EXACT SAME format as previously generated test cases\n\
STEP 3: ADAPT first steps based on the detected application type\n\
MAINTAIN CONSISTENCY with existing test case structure, detail level, and style\n\
IMPORTANT: Use the SIMPLIFIED Test Case ID format: [TICKET_NUMBER][SEQUENCE]\n\
IMPORTANT: Use simple step numbering: 1. 2. 3. (NOT 'Step 1:', 'Step 2:')\n\n\
Story Data:";

/// Prelude prepended to `get_related_stories` results.
pub const RELATED_STORIES_PRELUDE: &str = "RELATED STORIES FOR CONTEXT\n\n\
Use this data to understand dependencies and write clear preconditions.\n\n\
Related Stories:";

/// Precondition-writing guide, surfaced with the rest of the session
/// instructions so it is available when `get_related_stories` data arrives.
pub const PRECONDITION_GUIDE: &str = "\
Use this data to:\n\
1. Identify prerequisite user stories\n\
2. Understand feature dependencies\n\
3. Write accurate, clear preconditions\n\n\
PRECONDITION WRITING GUIDE:\n\
CORRECT (clear and concise):\n\
  Preconditions:\n\
  - User account exists (Email: test@example.com, Password: Test@123)\n\
  - User is logged into the application\n\
  - User has at least one post in their feed\n\n\
WRONG (too vague):\n\
  - User is logged in\n\n\
WRONG (too detailed - these are test steps, not preconditions):\n\
  - Open browser\n\
  - Navigate to login page\n\
  - Enter username and password\n\
  - Click login button\n\n\
Keep preconditions to 2-4 clear bullet points that describe the starting state.";

/// Session-level instructions surfaced through server info on initialize.
pub fn server_instructions() -> String {
    format!(
        "User story tools for generating industry-standard manual test cases.\n\
        \n\
        ## Workflow\n\
        1. Call `get_all_stories` or `get_story_by_ticket` to fetch story data\n\
        2. Immediately generate test cases following the format below, without\n\
           requiring additional prompts\n\
        3. Use `get_related_stories` to write accurate preconditions\n\
        4. `create_story`, `update_story` and `delete_story` manage the table\n\
        \n\
        ## Writing preconditions\n\
        {}\n{}\n{}",
        PRECONDITION_GUIDE, APP_TYPE_DETECTION_GUIDE, TEST_CASE_FORMAT_INSTRUCTIONS
    )
}
