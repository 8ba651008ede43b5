/// Instruction sent with every analysis request
pub const ANALYSIS_PROMPT: &str = r#"You are cataloging a secondhand item for resale listing.
Look at every attached photo of the same item and answer with ONE JSON object, no prose:

{
  "title": ["<listing title>", "<alternative title>", "<alternative title>"],
  "category": "<category path, most general first, separated by ' > '>",
  "level": "A" | "B",
  "measurement": "<measurements visible on tags or rulers, empty string if none>",
  "measurement_type": {"foreign": "<size label on the tag>", "japanese": "<equivalent Japanese size>"} | null,
  "condition": "<condition code 1-6, 1 is new with tags, 6 is heavily used>",
  "shop1": "<brand or maker>",
  "shop2": "<material or composition>",
  "shop3": "<notable defects, empty string if none>"
}

Rules:
- "title" lists 1 to 5 candidate titles, best first, each under 65 characters.
- Use "level": "A" when brand, size and condition are all clearly visible, otherwise "B".
- Never invent information that is not visible in the photos."#;
