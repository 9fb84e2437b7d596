// All LLM prompt bodies for the interview pipeline.
// System personas and sampling limits live in llm_client::prompts.

/// Substituted for a missing résumé or job description.
pub const NOT_PROVIDED: &str = "Not provided";

/// Question generation preamble.
/// Replace: {tier}, {resume}, {job_description}
pub const QUESTION_PREAMBLE_TEMPLATE: &str = r#"You are an expert HR interviewer.
Using the candidate profile below, generate EXACTLY 5 interview questions
for a candidate at the {tier} experience level.

Resume:
{resume}

Job Description:
{job_description}"#;

pub const FRESHER_INSTRUCTIONS: &str = r#"Question plan for a FRESHER candidate (0-2 years, graduates and interns):
1. An introduction question: ask the candidate to introduce themselves, their education and what drew them to this role.
2. A fundamentals question on a core concept named in the job description or resume.
3. A question about an academic, internship or personal project listed on the resume.
4. A simple problem-solving question that can be answered verbally in under two minutes.
5. A behavioral question about learning something new, teamwork or handling feedback.
Complexity ceiling: no system design, no architecture trade-offs, no questions that assume production experience."#;

pub const MID_INSTRUCTIONS: &str = r#"Question plan for a MID-LEVEL candidate (2-5 years):
1. An introduction question: ask the candidate to walk through their professional background and current responsibilities.
2. A hands-on technical question on a tool or technology the role requires.
3. A debugging or troubleshooting scenario drawn from the role's day-to-day work.
4. A question about a feature or project the candidate delivered end-to-end and the decisions they made.
5. A behavioral question about collaboration, deadlines or disagreement within a team.
Complexity ceiling: component-level design at most; do not ask for organisation-wide architecture or leadership strategy."#;

pub const SENIOR_INSTRUCTIONS: &str = r#"Question plan for a SENIOR candidate (5+ years, lead or architect roles):
1. An introduction question: ask the candidate to summarise their career and the systems they have owned.
2. A system design question at the scale implied by the job description, including trade-offs.
3. A question on architecture decisions: reliability, scalability, security or cost under real constraints.
4. A question on technical leadership: mentoring, code review standards or driving a cross-team initiative.
5. A behavioral question about handling an incident, a failed project or conflicting stakeholder priorities.
Complexity ceiling: expect depth, but each question must be answerable verbally in under five minutes; no whiteboard coding."#;

/// Output rules appended to every question prompt.
pub const QUESTION_OUTPUT_RULES: &str = r#"Rules:
- Output EXACTLY 5 questions, numbered 1-5, one per line
- Questions must be role-specific and avoid repeating resume lines
- Do NOT include answers, hints or explanations
- Do NOT include any text before or after the numbered questions"#;

/// Profile summarization prompt. Replace: {resume}, {job_description}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"You are an expert technical recruiter.

Summarize the candidate profile using the information below.

Resume:
{resume}

Job Description:
{job_description}

Create a concise summary including:
- Key skills
- Experience level
- Domain / role
- Important tools or technologies

Output format:
- Skills:
- Experience:
- Domain:
- Tools:"#;

/// Transcript evaluation prompt. Replace: {transcript}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an expert interview evaluator.

Evaluate the interview transcript below and score the candidate.

Transcript:
{transcript}

Provide:
- Overall Score (0-10)
- Communication (0-10)
- Confidence (0-10)
- Technical Knowledge (0-10)
- Grammar (0-10)
- Answer Quality (0-10)
- Summary (2-3 lines)
- Strengths (3 points)
- Areas for Improvement (3 points)
- Recommendations (3 actionable steps)

Write each score on its own line as "<Label>: <number>".
Use clear headings and bullet points."#;
