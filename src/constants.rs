// Endpoint and storage defaults - single source of truth for the session.
pub const DEFAULT_ENDPOINT: &str = "https://countries.trevorblades.com/"; // Initial
pub const DATA_API_BASE: &str = "https://api.portals.noloco.io/data";
pub const API_KEY_STORAGE_KEY: &str = "graphiql:key";

/// Where a user finds their API key for a given project.
pub fn settings_url(project_name: &str) -> String {
    format!("https://{}.noloco.co/_/settings/integrations", project_name)
}

pub const DEFAULT_QUERY: &str = r#"
# Welcome to Noloco GraphiQL
#
# Noloco GraphiQL is an in-browser tool for writing, validating, and
# testing Noloco queries.
#
# Type queries into this side of the screen, and you will see intelligent
# typeaheads aware of the current GraphQL type schema and live syntax and
# validation errors highlighted within the text.
#
# GraphQL queries typically start with a "{" character. Lines that starts
# with a # are ignored.
#
# An example GraphQL query might look like:
#
#     query userCollection{
#       userCollection {
#         totalCount
#         edges {
#           node {
#             id
#             email
#           }
#         }
#       }
#     }
#
# Keyboard shortcuts:
#
#       Run Query:  Ctrl-Enter (or press the play button above)
#
#   Auto Complete:  Ctrl-Space (or just start typing)
#
# # # # # # # # # # # # # # # # # # # # # # # # # # # # # #
# # # # # # # # # # # # # # # # # # # # # # # # # # # # # #

query userCollection{
  userCollection {
    totalCount
    edges {
      node {
        id
        email
      }
    }
  }
}
"#;
