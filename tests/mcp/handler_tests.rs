//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::DocsCorpus;
    use docshelf::mcp::handlers::ProtocolHandlers;
    use docshelf::mcp::protocol::*;
    use serde_json::json;

    fn create_test_handlers(files: &[(&str, &str)]) -> (ProtocolHandlers, DocsCorpus) {
        let corpus = DocsCorpus::with_files(files);
        let services = corpus.services();
        // Mirror server startup: the catalog is primed before requests arrive
        services.catalog.refresh().unwrap();
        (ProtocolHandlers::new(services), corpus)
    }

    fn request(id: i64, method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let req = request(
            1,
            "initialize",
            Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"resources": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        );

        let response = handlers.handle_initialize(req).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "docshelf-mcp");
        assert_eq!(result["capabilities"]["resources"]["subscribe"], false);
    }

    #[tokio::test]
    async fn test_initialized_handler() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "initialized".to_string(),
            params: Some(json!({})),
        };

        let response = handlers.handle_initialized(req).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_cancelled_handler() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/cancelled".to_string(),
            params: Some(json!({"requestId": 7})),
        };

        let response = handlers.handle_cancelled(req).await.unwrap();

        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers.handle_ping(request(2, "ping", None)).await.unwrap();

        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_resources_list() {
        let (handlers, _corpus) = create_test_handlers(&[
            ("api/auth.md", "# Auth"),
            ("guides/install.md", "# Install"),
            ("README.md", "# Top"),
        ]);

        let response = handlers
            .handle_resources_list(request(3, "resources/list", None))
            .await
            .unwrap();

        let result = response.result.unwrap();
        let resources = result["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 3);

        let uris: Vec<&str> = resources
            .iter()
            .map(|r| r["uri"].as_str().unwrap())
            .collect();
        assert_eq!(
            uris,
            vec![
                "docs://api/auth",
                "docs://general/README",
                "docs://guides/install"
            ]
        );
        assert_eq!(resources[0]["name"], "api/auth");
        assert_eq!(resources[0]["mimeType"], "text/markdown");
    }

    #[tokio::test]
    async fn test_resources_list_empty_corpus() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers
            .handle_resources_list(request(4, "resources/list", None))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["resources"], json!([]));
    }

    #[tokio::test]
    async fn test_resources_read_success() {
        let (handlers, _corpus) =
            create_test_handlers(&[("api/auth.md", "# Auth\n\nToken flows.\n")]);

        let response = handlers
            .handle_resources_read(request(5, "resources/read", Some(json!({
                "uri": "docs://api/auth"
            }))))
            .await
            .unwrap();

        let result = response.result.unwrap();
        let contents = result["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["uri"], "docs://api/auth");
        assert_eq!(contents[0]["mimeType"], "text/markdown");
        assert_eq!(contents[0]["text"], "# Auth\n\nToken flows.\n");
    }

    #[tokio::test]
    async fn test_resources_read_unknown_resource() {
        let (handlers, _corpus) = create_test_handlers(&[("api/auth.md", "# Auth")]);

        let response = handlers
            .handle_resources_read(request(6, "resources/read", Some(json!({
                "uri": "docs://api/missing"
            }))))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, RESOURCE_NOT_FOUND);
        assert!(error.message.contains("docs://api/missing"));
    }

    #[tokio::test]
    async fn test_resources_read_malformed_uri() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers
            .handle_resources_read(request(7, "resources/read", Some(json!({
                "uri": "http://api/auth"
            }))))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_resources_read_missing_segment() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers
            .handle_resources_read(request(8, "resources/read", Some(json!({
                "uri": "docs://auth"
            }))))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_resources_read_missing_params() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers
            .handle_resources_read(request(9, "resources/read", None))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Missing params"));
    }

    #[tokio::test]
    async fn test_tools_list_has_both_tools() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers
            .handle_tools_list(request(10, "tools/list", None))
            .await
            .unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);

        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert!(names.contains(&"search_docs"));
        assert!(names.contains(&"list_docs"));
    }

    #[tokio::test]
    async fn test_tools_call_search_docs() {
        let (handlers, _corpus) =
            create_test_handlers(&[("api/auth.md", "# Auth\n\nTokens expire hourly.\n")]);

        let response = handlers
            .handle_tools_call(request(11, "tools/call", Some(json!({
                "name": "search_docs",
                "arguments": {"query": "tokens"}
            }))))
            .await
            .unwrap();

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Found 1 result(s)"), "Got: {text}");
        assert!(text.contains("## api/auth"), "Got: {text}");
        assert!(text.contains("Line 3: Tokens expire hourly."), "Got: {text}");
    }

    #[tokio::test]
    async fn test_tools_call_list_docs() {
        let (handlers, _corpus) = create_test_handlers(&[("api/auth.md", "# Auth")]);

        let response = handlers
            .handle_tools_call(request(12, "tools/call", Some(json!({
                "name": "list_docs"
            }))))
            .await
            .unwrap();

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("docs://api/auth"), "Got: {text}");
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers
            .handle_tools_call(request(13, "tools/call", None))
            .await
            .unwrap();

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Missing params"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let (handlers, _corpus) = create_test_handlers(&[]);

        let response = handlers
            .handle_tools_call(request(14, "tools/call", Some(json!({
                "name": "delete_docs",
                "arguments": {}
            }))))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("Tool not found: delete_docs"));
    }

    #[tokio::test]
    async fn test_tools_call_empty_query() {
        let (handlers, _corpus) = create_test_handlers(&[("api/auth.md", "# Auth")]);

        let response = handlers
            .handle_tools_call(request(15, "tools/call", Some(json!({
                "name": "search_docs",
                "arguments": {"query": "   "}
            }))))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Query cannot be empty"));
    }

    #[tokio::test]
    async fn test_corpus_deleted_surfaces_unavailable() {
        let (handlers, corpus) = create_test_handlers(&[("api/auth.md", "# Auth")]);
        corpus.remove_root();

        let response = handlers
            .handle_resources_list(request(16, "resources/list", None))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, CORPUS_UNAVAILABLE);

        let response = handlers
            .handle_tools_call(request(17, "tools/call", Some(json!({
                "name": "search_docs",
                "arguments": {"query": "token"}
            }))))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, CORPUS_UNAVAILABLE);
    }
}
