//! User command handlers

use log::info;

use super::columns::USERS;
use crate::cli::{UserCommand, UserListArgs};
use crate::error::{Result, SlError};
use crate::softlayer::SlClient;
use crate::ui::{clear_spinner, create_spinner};

/// Run a user subcommand
pub async fn run_user_command(client: &SlClient, command: &UserCommand, quiet: bool) -> Result<()> {
    let output = match command {
        UserCommand::List(args) => list_users(client, args, quiet).await?,
    };
    println!("{}", output);
    Ok(())
}

/// List users on the account
pub async fn list_users(client: &SlClient, args: &UserListArgs, quiet: bool) -> Result<String> {
    let query = args.select.query(None)?;
    let plan = USERS.plan(&query)?;

    let spinner = create_spinner("Fetching users...", quiet);
    let result = client.get_users(&plan.mask).await;
    clear_spinner(spinner);

    let users = result.map_err(|e| SlError::upstream("Failed to list users.", e))?;
    info!("Found {} users", users.len());
    plan.present(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SelectArgs;
    use crate::softlayer::Credentials;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(endpoint: &str) -> SlClient {
        SlClient::new(Credentials {
            username: "user".to_string(),
            api_key: "key".to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    fn args(output: &str, column: &[&str]) -> UserListArgs {
        UserListArgs {
            select: SelectArgs {
                column: column.iter().map(|c| c.to_string()).collect(),
                columns: Vec::new(),
                output: output.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_list_users_keeps_transport_order() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/SoftLayer_Account/getUsers.json"))
            .and(query_param("objectMask", "mask[username,userStatus.name]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"username": "zed", "userStatus": {"name": "Active"}},
                {"username": "amy"}
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let out = list_users(&client, &args("csv", &["username", "status"]), true)
            .await
            .unwrap();
        assert_eq!(out, "username,status\nzed,Active\namy,-");
    }

    #[tokio::test]
    async fn test_list_users_rejects_unknown_column() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server.uri());
        let err = list_users(&client, &args("table", &["password"]), true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Incorrect Usage: --column password is not supported.");
    }

    #[tokio::test]
    async fn test_list_users_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Invalid API token.",
                "code": "SoftLayer_Exception_Public"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = list_users(&client, &args("json", &[]), true).await.unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("Failed to list users.\n"));
        assert!(text.contains("Invalid API token."));
        assert_eq!(err.exit_code(), 2);
    }
}
